use crate::server::{
    data::book::BookRepository,
    model::book::{CreateBookParams, UpdateBookParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;
