use rusqlite::Row;

#[derive(Clone, Debug, PartialEq)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub birth_date: String,
    pub phone: String,
}

impl Person {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Person {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            birth_date: row.get(3)?,
            phone: row.get(4)?,
        })
    }
}

/// The four caller-supplied fields; storage assigns the id on insert.
#[derive(Clone, Debug, PartialEq)]
pub struct NewPerson {
    pub name: String,
    pub email: String,
    pub birth_date: String,
    pub phone: String,
}

impl NewPerson {
    pub(crate) fn into_person(self, id: i64) -> Person {
        Person {
            id,
            name: self.name,
            email: self.email,
            birth_date: self.birth_date,
            phone: self.phone,
        }
    }
}
