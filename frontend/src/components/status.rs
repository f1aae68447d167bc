//! Status line and activity log.
//!
//! The status line shows the latest [`MintStatus`]; the log below it keeps
//! every status change with its time, auto-scrolled to the newest entry.

use leptos::*;

use crate::config::EXPLORER_TX_URL;
use crate::types::{LogEntry, MintStatus};

#[component]
pub fn StatusPanel(
    status: ReadSignal<MintStatus>,
    logs: ReadSignal<Vec<LogEntry>>,
    /// Set logs signal (for clearing)
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let logs_container = create_node_ref::<html::Div>();

    create_effect(move |_| {
        let _ = logs.with(Vec::len);

        if let Some(container) = logs_container.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    let explorer_link = move || match status.get() {
        MintStatus::Minted { tx_hash } => {
            let href = format!("{}/{}", EXPLORER_TX_URL, tx_hash);
            Some(view! { <a class="explorer-link" href=href target="_blank">"View on explorer"</a> })
        }
        _ => None,
    };

    view! {
        <div class="status-section">
            <h3>"Status"</h3>
            <p class=move || status.with(|s| s.level().css_class())>{move || status.get().to_string()}</p>
            {explorer_link}

            <Show when=move || !logs.with(Vec::is_empty) fallback=|| view! { }>
                <div class="logs-panel">
                    <div class="logs-header">
                        <span class="logs-title">"📋 Activity"</span>
                        <button class="logs-clear" on:click=move |_| set_logs.set(vec![])>
                            "Clear"
                        </button>
                    </div>
                    <div class="logs-content" node_ref=logs_container>
                        <For
                            each=move || logs.get().into_iter().enumerate()
                            key=|(i, entry)| (*i, entry.timestamp.clone())
                            children=move |(_, entry)| {
                                view! {
                                    <div class=format!("log-entry {}", entry.level.css_class())>
                                        <span class="log-time">"[" {entry.timestamp.clone()} "] "</span>
                                        {entry.message.clone()}
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Append `status` to the activity log, dropping the oldest entries past `max`.
pub fn push_log(logs: &mut Vec<LogEntry>, status: &MintStatus, timestamp: String, max: usize) {
    if *status == MintStatus::Idle {
        return;
    }
    logs.push(LogEntry {
        level: status.level(),
        message: status.to_string(),
        timestamp,
    });
    if logs.len() > max {
        let excess = logs.len() - max;
        logs.drain(..excess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LogLevel;

    #[test]
    fn test_push_log_caps_entries() {
        let mut logs = Vec::new();
        push_log(&mut logs, &MintStatus::Preparing, "10:00:00".to_string(), 2);
        push_log(&mut logs, &MintStatus::Verifying, "10:00:01".to_string(), 2);
        push_log(&mut logs, &MintStatus::Failed("boom".to_string()), "10:00:02".to_string(), 2);

        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].message, "Step 2/4: Verifying image & building transaction...");
        assert_eq!(logs[1].message, "Error: boom");
        assert_eq!(logs[1].level, LogLevel::Error);
    }

    #[test]
    fn test_push_log_ignores_idle() {
        let mut logs = Vec::new();
        push_log(&mut logs, &MintStatus::Idle, "10:00:00".to_string(), 10);
        assert!(logs.is_empty());
    }
}
