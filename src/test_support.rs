use std::{collections::HashMap, sync::Mutex, time::Duration};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::{
    config::POKEAPI_BASE_URL,
    error::FetchError,
    http_client::{HttpClient, RawResponse},
    roster::Endpoints,
};

enum FakeReply {
    Body { status: u16, body: Vec<u8> },
    Delayed { after: Duration, body: Vec<u8> },
    Fail(String),
    Hang,
}

/// In-memory [`HttpClient`] answering from canned replies and remembering every url it
/// was asked for. Unknown urls fail like an unreachable host.
#[derive(Default)]
pub struct FakeClient {
    replies: HashMap<String, FakeReply>,
    requests: Mutex<Vec<String>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn json(self, url: impl Into<String>, body: Value) -> Self {
        self.reply(url, 200, body.to_string().into_bytes())
    }

    /// Answers 200 with `body` once `after` has elapsed on the tokio clock.
    pub fn json_after(mut self, url: impl Into<String>, after: Duration, body: Value) -> Self {
        let body = body.to_string().into_bytes();
        self.replies
            .insert(url.into(), FakeReply::Delayed { after, body });
        self
    }

    pub fn status(self, url: impl Into<String>, status: u16) -> Self {
        self.reply(url, status, br#"{"detail":"nope"}"#.to_vec())
    }

    pub fn reply(mut self, url: impl Into<String>, status: u16, body: Vec<u8>) -> Self {
        self.replies
            .insert(url.into(), FakeReply::Body { status, body });
        self
    }

    pub fn fail(mut self, url: impl Into<String>, cause: &str) -> Self {
        self.replies
            .insert(url.into(), FakeReply::Fail(cause.to_string()));
        self
    }

    pub fn hang(mut self, url: impl Into<String>) -> Self {
        self.replies.insert(url.into(), FakeReply::Hang);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for FakeClient {
    async fn get(&self, url: &str) -> Result<RawResponse, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.replies.get(url) {
            Some(FakeReply::Body { status, body }) => Ok(RawResponse {
                status: *status,
                body: body.clone(),
            }),
            Some(FakeReply::Delayed { after, body }) => {
                tokio::time::sleep(*after).await;
                Ok(RawResponse {
                    status: 200,
                    body: body.clone(),
                })
            }
            Some(FakeReply::Fail(cause)) => Err(FetchError::Transport {
                url: url.to_string(),
                cause: cause.clone(),
            }),
            Some(FakeReply::Hang) => futures::future::pending().await,
            None => Err(FetchError::Transport {
                url: url.to_string(),
                cause: "no reply registered".into(),
            }),
        }
    }
}

pub fn endpoints() -> Endpoints {
    Endpoints::new(POKEAPI_BASE_URL).unwrap()
}

pub fn pokemon_url(id: u32) -> String {
    format!("{POKEAPI_BASE_URL}/pokemon/{id}")
}

pub fn listing(entries: &[(&str, u32)]) -> Value {
    json!({
        "count": 1302,
        "results": entries
            .iter()
            .map(|(name, id)| json!({ "name": name, "url": pokemon_url(*id) }))
            .collect::<Vec<_>>(),
    })
}

pub fn type_listing(entries: &[(&str, u32)]) -> Value {
    json!({
        "pokemon": entries
            .iter()
            .map(|(name, id)| {
                json!({ "slot": 1, "pokemon": { "name": name, "url": pokemon_url(*id) } })
            })
            .collect::<Vec<_>>(),
    })
}

/// Detail payload without an `id`, shaped like PokeAPI's.
pub fn details(artwork: &str, types: &[&str], stats: [u32; 6]) -> Value {
    json!({
        "sprites": {
            "other": { "official-artwork": { "front_default": artwork } },
            "front_default": format!("small_{artwork}"),
        },
        "types": types
            .iter()
            .map(|name| json!({ "slot": 1, "type": { "name": name, "url": "" } }))
            .collect::<Vec<_>>(),
        "stats": stats
            .iter()
            .map(|base_stat| json!({ "base_stat": base_stat, "effort": 0 }))
            .collect::<Vec<_>>(),
    })
}

pub fn details_with_id(id: u32, artwork: &str, types: &[&str], stats: [u32; 6]) -> Value {
    let mut payload = details(artwork, types, stats);
    payload["id"] = json!(id);
    payload
}

pub fn bulbasaur_details() -> Value {
    details("bulba.png", &["grass"], [45, 49, 49, 65, 65, 45])
}

pub fn charmander_details() -> Value {
    details("char.png", &["fire"], [39, 52, 43, 60, 50, 65])
}
