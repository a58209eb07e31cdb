use dioxus::prelude::*;

use crate::{
    client::model::error::ApiError,
    model::book::{
        check_book_fields, validate_book_fields, BookField, BookFields, FieldError,
        AUTHOR_MAX_LEN, DESCRIPTION_MAX_LEN, TITLE_MAX_LEN,
    },
};

fn error_for(errors: &[FieldError], field: BookField) -> Option<String> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.clone())
}

/// Add/edit form for a book.
///
/// Fields are checked against the shared limits before `on_submit` is called, so
/// the handler always receives trimmed, valid fields. Errors returned by the
/// server are shown above the actions.
#[component]
pub fn BookForm(
    #[props(default)] title: String,
    #[props(default)] author: String,
    #[props(default)] description: String,
    submit_label: String,
    submitting_label: String,
    is_submitting: bool,
    server_error: Option<ApiError>,
    on_submit: EventHandler<BookFields>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut title = use_signal(|| title);
    let mut author = use_signal(|| author);
    let mut description = use_signal(|| description);
    let mut field_errors = use_signal(Vec::<FieldError>::new);

    let on_form_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let description_value = description();
        let description_value = Some(description_value.as_str());

        let errors = check_book_fields(&title(), &author(), description_value);
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(Vec::new());

        if let Ok(fields) = validate_book_fields(&title(), &author(), description_value) {
            on_submit.call(fields);
        }
    };

    let errors = field_errors();
    let title_error = error_for(&errors, BookField::Title);
    let author_error = error_for(&errors, BookField::Author);
    let description_error = error_for(&errors, BookField::Description);
    let description_len = description().chars().count();

    rsx!(
        form {
            class: "flex flex-col gap-4 w-full max-w-2xl",
            onsubmit: on_form_submit,

            fieldset {
                class: "fieldset",
                legend { class: "fieldset-legend", "Title" }
                input {
                    r#type: "text",
                    class: if title_error.is_some() { "input input-bordered input-error w-full" } else { "input input-bordered w-full" },
                    maxlength: "{TITLE_MAX_LEN}",
                    value: "{title}",
                    disabled: is_submitting,
                    oninput: move |evt| title.set(evt.value()),
                }
                if let Some(ref err) = title_error {
                    p { class: "text-error text-sm", "{err}" }
                }
            }

            fieldset {
                class: "fieldset",
                legend { class: "fieldset-legend", "Author" }
                input {
                    r#type: "text",
                    class: if author_error.is_some() { "input input-bordered input-error w-full" } else { "input input-bordered w-full" },
                    maxlength: "{AUTHOR_MAX_LEN}",
                    value: "{author}",
                    disabled: is_submitting,
                    oninput: move |evt| author.set(evt.value()),
                }
                if let Some(ref err) = author_error {
                    p { class: "text-error text-sm", "{err}" }
                }
            }

            fieldset {
                class: "fieldset",
                legend { class: "fieldset-legend", "Description (optional)" }
                textarea {
                    class: if description_error.is_some() { "textarea textarea-bordered textarea-error w-full h-40" } else { "textarea textarea-bordered w-full h-40" },
                    value: "{description}",
                    disabled: is_submitting,
                    oninput: move |evt| description.set(evt.value()),
                }
                p {
                    class: "text-xs opacity-60 text-right",
                    "{description_len} / {DESCRIPTION_MAX_LEN}"
                }
                if let Some(ref err) = description_error {
                    p { class: "text-error text-sm", "{err}" }
                }
            }

            if let Some(err) = server_error {
                div {
                    class: "alert alert-error flex flex-col items-start",
                    span { "{err.message}" }
                    if !err.errors.is_empty() {
                        ul {
                            class: "list-disc list-inside text-sm",
                            for e in err.errors.iter() {
                                li { "{e}" }
                            }
                        }
                    }
                }
            }

            div {
                class: "flex justify-end gap-2",
                button {
                    r#type: "button",
                    class: "btn",
                    disabled: is_submitting,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: is_submitting,
                    if is_submitting {
                        span { class: "loading loading-spinner loading-sm mr-2" }
                        "{submitting_label}"
                    } else {
                        "{submit_label}"
                    }
                }
            }
        }
    )
}
