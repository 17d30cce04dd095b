use diesel::prelude::*;
use serde::Serialize;
use crate::db::schema::users;

#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = users)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub sign: String,
    pub horoscope: Option<String>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub sign: &'a str,
    pub horoscope: Option<&'a str>,
}
