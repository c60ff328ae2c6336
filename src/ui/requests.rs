//! # Background Requests
//!
//! The event loop never awaits the network. A user action yields a
//! [`Request`]; [`spawn`] runs it on the tokio runtime and sends the
//! [`Response`] back over an unbounded channel, which the loop drains before
//! every frame.
//!
//! Requests are independent. Two in flight at once (users and minion on
//! dashboard mount) may complete in either order, and nothing is cancelled:
//! every response is delivered.
//!
//! A failure is never retried. It arrives as [`Response::Failed`], which
//! re-enables the control that sent it and puts the error on the footer
//! status line instead of leaving the control stuck in its loading state.

use crate::grid::Dataset;
use crate::remote::{Minion, RemoteClient};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, error};

/// Work the UI wants done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    FetchUsers,
    FetchMinion(u32),
    SendChat(String),
}

/// Which control a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Users,
    Minion,
    Chat,
}

impl Request {
    pub fn kind(&self) -> RequestKind {
        match self {
            Request::FetchUsers => RequestKind::Users,
            Request::FetchMinion(_) => RequestKind::Minion,
            Request::SendChat(_) => RequestKind::Chat,
        }
    }
}

/// Outcome of a [`Request`].
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Users(Dataset),
    Minion(Minion),
    ChatReply(String),
    Failed { kind: RequestKind, message: String },
}

/// Run one request to completion.
pub async fn perform(client: &RemoteClient, request: Request) -> Response {
    let kind = request.kind();
    let result = match request {
        Request::FetchUsers => client.fetch_users().await.map(Response::Users),
        Request::FetchMinion(id) => client.fetch_minion(id).await.map(Response::Minion),
        Request::SendChat(input) => client.send_chat(&input).await.map(Response::ChatReply),
    };

    result.unwrap_or_else(|e| {
        error!(?kind, "request failed: {:#}", e);
        Response::Failed {
            kind,
            message: format!("{:#}", e),
        }
    })
}

/// Run `request` in the background and deliver its response on `tx`.
pub fn spawn(client: RemoteClient, request: Request, tx: UnboundedSender<Response>) {
    debug!(?request, "spawning request");
    tokio::spawn(async move {
        let response = perform(&client, request).await;
        // The receiver is gone only when the UI has exited.
        let _ = tx.send(response);
    });
}
