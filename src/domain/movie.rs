use serde::{Deserialize, Serialize};

use crate::domain::MovieId;

/// Фильм в каталоге. После создания не меняется и никогда не удаляется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
}

impl Movie {
    pub fn new(id: MovieId, title: String) -> Self {
        Self { id, title }
    }
}
