#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use bacheca::infra::http::api::models::{CreateMessageRequest, MessageResponse};
use reqwest::Method;

use crate::args::MessagesCmd;
use crate::client::{CliError, Ctx};
use crate::io::{read_value, to_value};
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: MessagesCmd) -> Result<(), CliError> {
    match cmd {
        MessagesCmd::List => list(ctx).await,
        MessagesCmd::Get { id } => get(ctx, id).await,
        MessagesCmd::Create {
            content,
            content_file,
        } => create(ctx, content, content_file).await,
    }
}

async fn list(ctx: &Ctx) -> Result<(), CliError> {
    let messages: Vec<MessageResponse> = ctx.request(Method::GET, "messages", None).await?;
    print_json(&messages)
}

async fn get(ctx: &Ctx, id: i64) -> Result<(), CliError> {
    let message: MessageResponse = ctx
        .request(Method::GET, &format!("messages/{id}"), None)
        .await?;
    print_json(&message)
}

async fn create(
    ctx: &Ctx,
    content: Option<String>,
    content_file: Option<PathBuf>,
) -> Result<(), CliError> {
    let content = read_value(content, content_file)?;
    let body = to_value(CreateMessageRequest {
        content: Some(content),
    })?;

    let created: MessageResponse = ctx.request(Method::POST, "messages", Some(body)).await?;
    print_json(&created)
}
