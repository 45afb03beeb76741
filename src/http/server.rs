use chrono::NaiveDate;
use log::info;
use rouille::{Request, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    config::{Authority, HttpConfig, PublicEndpoint},
    domain::{
        outcome::GuessOutcome,
        playback::Playback,
        puzzle::{PuzzleId, PuzzleView, today_utc},
    },
    game::operations::{Game, GradedGuess, GuessSubmission},
    http::error::ApiError,
    public_endpoint::get_share_url,
};

pub struct HttpServer {
    game: Arc<Game>,
    public_endpoint: Option<PublicEndpoint>,
    pub config: HttpConfig,
    today: fn() -> NaiveDate,
}

impl HttpServer {
    pub fn new(game: Game, config: HttpConfig, public_endpoint: Option<PublicEndpoint>) -> Self {
        Self {
            game: Arc::new(game),
            public_endpoint,
            config,
            today: today_utc,
        }
    }

    pub fn run(self) {
        let addr = format!("{}:{}", self.config.bind_addr, self.config.port);
        rouille::start_server(addr, move |request| self.handle_request(request));
    }

    fn handle_request(&self, request: &Request) -> Response {
        Self::log_request(request);

        let response = rouille::router!(request,
            (GET) (/) => {
                Self::handle_game_page()
            },
            (GET) (/api/puzzle) => {
                self.handle_get_puzzle()
            },
            (GET) (/api/puzzle/{id: String}) => {
                self.handle_replay_puzzle(&id)
            },
            (POST) (/api/guess) => {
                self.handle_guess(request)
            },
            _ => Response::empty_404()
        );

        info!("Response: {} {}", request.method(), response.status_code);
        response
    }

    fn log_request(request: &Request) {
        info!("{} {}", request.method(), request.url());
    }

    fn handle_game_page() -> Response {
        Response::html(include_str!("../../html/game.html"))
    }

    /// never fails: a day without a track gets the "unavailable" puzzle
    fn handle_get_puzzle(&self) -> Response {
        let view = self.game.puzzle_for(PuzzleId((self.today)()));
        Response::json(&self.puzzle_response(view))
    }

    fn handle_replay_puzzle(&self, id: &str) -> Response {
        match self.game.replay(id, (self.today)()) {
            Ok(view) => Response::json(&self.puzzle_response(view)),
            Err(e) => ApiError::from(e).into_response(),
        }
    }

    fn grade(&self, request: &Request) -> Result<GradedGuess, ApiError> {
        let body: GuessRequest = rouille::input::json_input(request)?;
        let graded = self
            .game
            .grade_guess(body.into_submission(), (self.today)())?;
        log::debug!("guess graded {}", graded.outcome);
        Ok(graded)
    }

    fn handle_guess(&self, request: &Request) -> Response {
        match self.grade(request) {
            Ok(graded) => Response::json(&GuessResponse {
                result: graded.outcome,
                answer: graded.answer,
            }),
            Err(e) => e.into_response(),
        }
    }

    fn puzzle_response(&self, view: PuzzleView) -> PuzzleResponse {
        let answer = match self.game.config().authority {
            Authority::Client => Some(view.answer),
            Authority::Server => None,
        };
        PuzzleResponse {
            puzzle_id: view.puzzle_id.to_string(),
            playback: Playback::for_reference(&view.reference),
            reference: view.reference,
            available: view.available,
            answer_revealed: false,
            clip_seconds: self.game.config().clip_seconds.clone(),
            share_url: self
                .public_endpoint
                .as_ref()
                .map(|endpoint| get_share_url(endpoint, view.puzzle_id)),
            answer,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PuzzleResponse {
    puzzle_id: String,
    reference: String,
    playback: Playback,
    available: bool,
    answer_revealed: bool,
    clip_seconds: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    share_url: Option<String>,
    /// only sent when the client grades against it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    answer: Option<String>,
}

/// `guess` may be missing, it is then graded as an empty guess
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GuessRequest {
    guess: Option<String>,
    answer: Option<String>,
    puzzle_id: Option<String>,
    #[serde(default)]
    final_attempt: bool,
}

impl GuessRequest {
    fn into_submission(self) -> GuessSubmission {
        GuessSubmission {
            guess: self.guess.unwrap_or_default(),
            answer: self.answer,
            puzzle_id: self.puzzle_id,
            final_attempt: self.final_attempt,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct GuessResponse {
    result: GuessOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    answer: Option<String>,
}

#[cfg(test)]
pub fn parse_json_response<T: serde::de::DeserializeOwned>(
    response: rouille::Response,
) -> anyhow::Result<T> {
    Ok(serde_json::from_reader(
        response.data.into_reader_and_size().0,
    )?)
}
