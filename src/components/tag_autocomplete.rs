//! Tag Autocomplete Component
//!
//! Tag input with fuzzy suggestions drawn from tags already in use.
//! Supports semicolon-separated batch input for pasting multiple tags.

use leptos::prelude::*;

/// Maximum suggestions shown under the input
const MAX_SUGGESTIONS: usize = 5;

/// Simple fuzzy match: check if query chars appear in order in the target
pub fn fuzzy_match(query: &str, target: &str) -> bool {
    let query = query.to_lowercase();
    let target = target.to_lowercase();

    let mut target_chars = target.chars();
    for query_char in query.chars() {
        loop {
            match target_chars.next() {
                Some(c) if c == query_char => break,
                Some(_) => continue,
                None => return false,
            }
        }
    }
    true
}

/// Get the current search segment (text after the last semicolon)
fn current_segment(input: &str) -> &str {
    input.rsplit(';').next().unwrap_or("").trim()
}

/// Replace the current segment (after last semicolon) with a new value
fn replace_current_segment(input: &str, new_segment: &str) -> String {
    if let Some(pos) = input.rfind(';') {
        format!("{}; {}", &input[..pos], new_segment)
    } else {
        new_segment.to_string()
    }
}

/// Non-empty trimmed tag names from a semicolon-separated input
pub fn split_tag_input(input: &str) -> Vec<String> {
    input
        .split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Suggestions for the segment being typed, skipping tags in `exclude`
pub fn suggestions_for(input: &str, all_tags: &[String], exclude: &[String]) -> Vec<String> {
    let segment = current_segment(input);
    if segment.is_empty() {
        return vec![];
    }
    all_tags
        .iter()
        .filter(|tag| !exclude.contains(tag))
        .filter(|tag| fuzzy_match(segment, tag))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}

/// Tag autocomplete input with suggestions
///
/// Props:
/// - all_tags: every tag known to the data interface
/// - exclude: tags already on the note
/// - on_select: called for EACH submitted tag name
#[component]
pub fn TagAutocomplete(
    #[prop(into)] all_tags: Signal<Vec<String>>,
    #[prop(into)] exclude: Signal<Vec<String>>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());
    let (selected_idx, set_selected_idx) = signal(0usize);

    let suggestions = move || {
        input_value.with(|input| {
            all_tags.with(|all| exclude.with(|exclude| suggestions_for(input, all, exclude)))
        })
    };

    // Replaces only the current segment
    let handle_suggestion_select = move |name: String| {
        let new_input = replace_current_segment(&input_value.get(), &name);
        set_input_value.set(new_input);
        set_selected_idx.set(0);
    };

    // Processes ALL semicolon-separated tags
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let tags = split_tag_input(&input_value.get());

        let sugg = suggestions();
        let sel = selected_idx.get();

        for (i, tag_name) in tags.iter().enumerate() {
            // The last tag may be completed from the highlighted suggestion
            let final_name = match sugg.get(sel) {
                Some(suggested) if i == tags.len() - 1 && fuzzy_match(tag_name, suggested) => {
                    suggested.clone()
                }
                _ => tag_name.clone(),
            };
            on_select.run(final_name);
        }

        set_input_value.set(String::new());
        set_selected_idx.set(0);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let sugg = suggestions();

        match ev.key().as_str() {
            "Tab" => {
                ev.prevent_default();
                if let Some(name) = sugg.get(selected_idx.get()) {
                    handle_suggestion_select(name.clone());
                }
            }
            "ArrowDown" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel + 1 < sugg.len() {
                    set_selected_idx.set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel > 0 {
                    set_selected_idx.set(sel - 1);
                }
            }
            _ => {}
        }
    };

    view! {
        <div class="tag-input-wrapper">
            <form class="tag-editor-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Add tags (separate with ;)..."
                    autocomplete="off"
                    prop:value=move || input_value.get()
                    on:input=move |ev| {
                        set_input_value.set(event_target_value(&ev));
                        set_selected_idx.set(0);
                    }
                    on:keydown=on_keydown
                />
                <button type="submit">"+"</button>
            </form>

            {move || {
                let sugg = suggestions();
                if sugg.is_empty() {
                    view! { <div></div> }.into_any()
                } else {
                    let selected = selected_idx.get();
                    view! {
                        <div class="autocomplete-list">
                            {sugg.into_iter().enumerate().map(|(i, name)| {
                                let name_for_click = name.clone();
                                view! {
                                    <button
                                        type="button"
                                        class=if i == selected { "autocomplete-item selected" } else { "autocomplete-item" }
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            handle_suggestion_select(name_for_click.clone());
                                        }
                                    >
                                        {name}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fuzzy_match() {
        assert!(fuzzy_match("wrk", "Work"));
        assert!(fuzzy_match("", "anything"));
        assert!(!fuzzy_match("kw", "work"));
    }

    #[test]
    fn test_split_tag_input() {
        assert_eq!(split_tag_input(" a; b ;;c "), tags(&["a", "b", "c"]));
        assert!(split_tag_input(" ; ").is_empty());
    }

    #[test]
    fn test_replace_current_segment() {
        assert_eq!(replace_current_segment("home; wo", "work"), "home; work");
        assert_eq!(replace_current_segment("wo", "work"), "work");
    }

    #[test]
    fn test_suggestions_use_last_segment_and_exclude() {
        let all = tags(&["work", "workout", "home", "homework"]);
        let exclude = tags(&["workout"]);
        assert_eq!(suggestions_for("home; wrk", &all, &exclude), tags(&["work", "homework"]));
        assert!(suggestions_for("home; ", &all, &exclude).is_empty());
    }
}
