/// Palette and layout for the chat page, injected once by the shell.
pub const STYLESHEET: &str = r#"
:root {
    --color-bg-primary: #f9fafb;
    --color-bg-surface: #ffffff;
    --color-text-primary: #111827;
    --color-text-muted: #6b7280;
    --color-border: #e5e7eb;
    --color-input-border: #d1d5db;
    --color-accent: #2563eb;
    --color-accent-hover: #1d4ed8;
    --color-disabled: #d1d5db;
    --color-chat-user-bg: #2563eb;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #ffffff;
    --color-chat-assistant-text: #111827;
    --color-tool-bg: #fffbeb;
    --color-tool-border: #fde68a;
    --color-tool-text: #92400e;
    --color-loading-dot: #9ca3af;
}
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; background: var(--color-bg-primary); color: var(--color-text-primary); }
.chat-page { display: flex; flex-direction: column; height: 100vh; }
.header { background: var(--color-bg-surface); border-bottom: 1px solid var(--color-border); padding: 1rem 1.5rem; }
.header h1 { margin: 0; font-size: 1.5rem; }
.header .subtitle { margin: 0.25rem 0 0; font-size: 0.875rem; color: var(--color-text-muted); }
.header .conversation-id { margin: 0.25rem 0 0; font-size: 0.75rem; color: var(--color-text-muted); }
.chat-scroll { flex: 1; overflow-y: auto; padding: 1.5rem; }
.chat-list { max-width: 56rem; margin: 0 auto; display: flex; flex-direction: column; gap: 1rem; }
.welcome { text-align: center; color: var(--color-text-muted); padding: 3rem 0; }
.welcome .check { font-size: 3.75rem; margin-bottom: 1rem; }
.message-row { display: flex; }
.message-row.user { justify-content: flex-end; }
.message-row.assistant { justify-content: flex-start; }
.bubble { max-width: 42rem; border-radius: 0.5rem; padding: 0.75rem 1rem; }
.bubble.user { background: var(--color-chat-user-bg); color: var(--color-chat-user-text); }
.bubble.assistant { background: var(--color-chat-assistant-bg); color: var(--color-chat-assistant-text); border: 1px solid var(--color-border); }
.bubble .role { font-size: 0.75rem; font-weight: 600; opacity: 0.75; margin-bottom: 0.25rem; }
.bubble .content { white-space: pre-wrap; }
.loading { display: flex; gap: 0.5rem; }
.loading span { width: 0.5rem; height: 0.5rem; border-radius: 9999px; background: var(--color-loading-dot); animation: bounce 1s infinite; }
.loading span:nth-child(2) { animation-delay: 0.1s; }
.loading span:nth-child(3) { animation-delay: 0.2s; }
@keyframes bounce { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-25%); } }
.tool-panel { background: var(--color-tool-bg); border-top: 1px solid var(--color-tool-border); padding: 0.75rem 1.5rem; }
.tool-panel .title { font-size: 0.75rem; font-weight: 600; color: var(--color-tool-text); margin-bottom: 0.5rem; }
.tool-call { font-family: ui-monospace, monospace; font-size: 0.75rem; color: var(--color-tool-text); background: var(--color-bg-surface); padding: 0.25rem 0.5rem; border-radius: 0.25rem; margin-top: 0.25rem; }
.composer { background: var(--color-bg-surface); border-top: 1px solid var(--color-border); padding: 1rem 1.5rem; }
.composer-inner { max-width: 56rem; margin: 0 auto; display: flex; gap: 0.75rem; align-items: flex-end; }
.composer textarea { flex: 1; resize: none; border: 1px solid var(--color-input-border); border-radius: 0.5rem; padding: 0.75rem 1rem; font: inherit; }
.composer textarea:focus { outline: none; border-color: var(--color-accent); }
.btn-primary { background: var(--color-accent); color: #ffffff; border: none; border-radius: 0.5rem; padding: 0.75rem 1.5rem; font-weight: 600; cursor: pointer; }
.btn-primary:hover { background: var(--color-accent-hover); }
.btn-primary:disabled { background: var(--color-disabled); cursor: not-allowed; }
"#;
