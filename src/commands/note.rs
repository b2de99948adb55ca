//! Note Commands
//!
//! Frontend bindings for note-related backend commands.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::error::DataResult;
use crate::models::NoteItem;
use super::invoke;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct UpdateNoteArgs<'a> {
    item: &'a NoteItem,
}

#[derive(Serialize)]
struct SearchArgs<'a> {
    query: &'a str,
}

// ========================
// Commands
// ========================

pub async fn get_note(id: &str) -> DataResult<Option<NoteItem>> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id })?;
    let result = invoke("get_note", js_args).await;
    Ok(serde_wasm_bindgen::from_value(result)?)
}

/// Replace a note; the backend stamps `lastChange` and returns the stored note
pub async fn update_note(item: &NoteItem) -> DataResult<NoteItem> {
    let js_args = serde_wasm_bindgen::to_value(&UpdateNoteArgs { item })?;
    let result = invoke("update_note", js_args).await;
    Ok(serde_wasm_bindgen::from_value(result)?)
}

pub async fn duplicate_note(id: &str) -> DataResult<NoteItem> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id })?;
    let result = invoke("duplicate_note", js_args).await;
    Ok(serde_wasm_bindgen::from_value(result)?)
}

pub async fn delete_note(id: &str) -> DataResult<()> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id })?;
    let _ = invoke("delete_note", js_args).await;
    Ok(())
}

pub async fn search_notes(query: &str) -> DataResult<Vec<NoteItem>> {
    let js_args = serde_wasm_bindgen::to_value(&SearchArgs { query })?;
    let result = invoke("search_notes", js_args).await;
    Ok(serde_wasm_bindgen::from_value(result)?)
}

/// All user tags in use, for autocomplete
pub async fn list_note_tags() -> DataResult<Vec<String>> {
    let result = invoke("list_note_tags", JsValue::NULL).await;
    Ok(serde_wasm_bindgen::from_value(result)?)
}
