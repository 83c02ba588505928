use serde::{Deserialize, Serialize};

use crate::domain::TheaterId;

/// Кинотеатр. Жизненный цикл такой же, как у Movie: создали и забыли.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Theater {
    pub id: TheaterId,
    pub name: String,
}

impl Theater {
    pub fn new(id: TheaterId, name: String) -> Self {
        Self { id, name }
    }
}
