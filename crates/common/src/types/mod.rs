use serde::Serialize;

/// Body of `GET /health`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub status: &'static str,
}

impl Health {
    pub fn ok() -> Self { Self { status: "ok" } }
}
