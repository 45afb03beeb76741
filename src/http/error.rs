use rouille::Response;

use crate::game::error::GameError;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::InvalidPuzzleId(_) | GameError::MissingField(_) => {
                ApiError::BadRequest(err.to_string())
            }

            GameError::PuzzleNotYetAvailable(_) | GameError::NoTrackAvailable(_) => {
                ApiError::NotFound(err.to_string())
            }
        }
    }
}

impl From<rouille::input::json::JsonError> for ApiError {
    fn from(err: rouille::input::json::JsonError) -> Self {
        ApiError::BadRequest(format!("malformed request body: {err}"))
    }
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::NotFound(_) => 404,
            ApiError::BadRequest(_) => 400,
        }
    }

    pub fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::NotFound(msg) | ApiError::BadRequest(msg) => {
                Response::text(msg).with_status_code(status)
            }
        }
    }
}
