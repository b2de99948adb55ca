//! Content Commands
//!
//! Frontend bindings for note body storage.

use serde::Serialize;
use crate::error::DataResult;
use super::invoke;

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct SetContentArgs<'a> {
    id: &'a str,
    content: &'a str,
}

pub async fn get_note_content(id: &str) -> DataResult<String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id })?;
    let result = invoke("get_note_content", js_args).await;
    let content: Option<String> = serde_wasm_bindgen::from_value(result)?;
    Ok(content.unwrap_or_default())
}

pub async fn set_note_content(id: &str, content: &str) -> DataResult<()> {
    let js_args = serde_wasm_bindgen::to_value(&SetContentArgs { id, content })?;
    let _ = invoke("set_note_content", js_args).await;
    Ok(())
}
