use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct PersonPayload {
    #[serde(rename(deserialize = "nome"))]
    pub name: String,
    pub email: String,
    #[serde(rename(deserialize = "data_nascimento"))]
    pub birth_date: String,
    pub phone: String,
}

#[derive(Debug, Default, Serialize)]
pub struct PersonBody {
    pub id: i64,
    #[serde(rename(serialize = "nome"))]
    pub name: String,
    pub email: String,
    #[serde(rename(serialize = "data_nascimento"))]
    pub birth_date: String,
    pub phone: String,
}
