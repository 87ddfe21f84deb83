//! Shared stylesheet injected by the console shell and the sign-in
//! boundary.

pub const CONSOLE_STYLES: &str = r#"
:root {
    --bg-primary: #0f172a;
    --bg-secondary: #1e293b;
    --text-primary: #f8fafc;
    --text-secondary: #94a3b8;
    --text-muted: #64748b;
    --accent-bg: #3b82f6;
    --accent-bg-hover: #2563eb;
    --accent-text: #ffffff;
    --border-color: #334155;
    --danger-bg: #ef4444;
    --success-bg: #10b981;
    --warning-bg: #f59e0b;
    --radius-sm: 4px;
    --radius-md: 8px;
    --shadow-lg: 0 10px 40px rgba(0, 0, 0, 0.5);
}

* {
    box-sizing: border-box;
}

body {
    margin: 0;
    padding: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg-primary);
    color: var(--text-primary);
}

.console-shell {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    padding: 1rem;
    min-height: 100dvh;
}

.console-header {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.console-header h2 {
    margin: 0;
    font-size: 1.2rem;
    flex: 1;
}

.console-loading {
    color: var(--text-secondary);
    font-size: 0.85rem;
}

button {
    font: inherit;
}

.console-refresh,
.filter-apply,
.filter-clear,
.dialog-close {
    padding: 0.35rem 0.8rem;
    background: var(--bg-secondary);
    color: var(--text-primary);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-md);
    cursor: pointer;
}

.action-primary {
    padding: 0.4rem 1rem;
    background: var(--accent-bg);
    color: var(--accent-text);
    border: none;
    border-radius: var(--radius-md);
    cursor: pointer;
}

.action-primary:hover:not(:disabled) {
    background: var(--accent-bg-hover);
}

button:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}

.filter-bar {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 0.5rem;
}

.filter-select,
.filter-value,
.dialog-select {
    padding: 0.35rem 0.5rem;
    background: var(--bg-secondary);
    color: var(--text-primary);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-sm);
    outline: none;
}

.grid-table-wrap {
    overflow-x: auto;
    border: 1px solid var(--border-color);
    border-radius: var(--radius-md);
}

.grid-table {
    width: 100%;
    border-collapse: collapse;
    font-size: 0.82rem;
    white-space: nowrap;
}

.grid-table th {
    position: sticky;
    top: 0;
    background: var(--bg-secondary);
    color: var(--text-secondary);
    text-align: left;
    padding: 0.45rem 0.6rem;
    border-bottom: 1px solid var(--border-color);
}

.grid-group-header {
    color: var(--text-muted);
    font-size: 0.72rem;
    text-transform: uppercase;
    letter-spacing: 0.04em;
}

.grid-table td {
    padding: 0.35rem 0.6rem;
    border-bottom: 1px solid var(--border-color);
}

.grid-row {
    cursor: pointer;
}

.grid-row.odd {
    background: rgba(255, 255, 255, 0.03);
}

.grid-row:hover {
    background: rgba(59, 130, 246, 0.12);
}

.grid-check-col {
    width: 2rem;
    text-align: center;
}

.grid-empty {
    padding: 1rem;
    color: var(--text-secondary);
    text-align: center;
}

.grid-actions {
    display: flex;
    gap: 0.75rem;
}

.cell-empty {
    color: var(--text-muted);
}

.cell-action {
    padding: 0.2rem 0.6rem;
    background: var(--accent-bg);
    color: var(--accent-text);
    border: none;
    border-radius: var(--radius-sm);
    cursor: pointer;
    font-size: 0.78rem;
}

.cell-download {
    background: transparent;
    color: var(--accent-bg);
    border: 1px solid var(--accent-bg);
}

.chip {
    display: inline-block;
    padding: 0.1rem 0.55rem;
    background: var(--bg-secondary);
    border: 1px solid var(--border-color);
    border-radius: 999px;
    font-size: 0.75rem;
}

.card-stream {
    display: flex;
    overflow-x: auto;
    scroll-snap-type: x mandatory;
    scrollbar-width: none;
    margin: 0 -1rem;
}

.card-stream::-webkit-scrollbar {
    display: none;
}

.card-stream-empty {
    width: 100vw;
    padding: 2rem 1rem;
    color: var(--text-secondary);
    text-align: center;
}

.order-card {
    flex: 0 0 100%;
    width: 100vw;
    max-width: 100vw;
    scroll-snap-align: start;
    border: 1px solid var(--border-color);
    padding: 1rem;
}

.order-card.active {
    border-color: var(--accent-bg);
}

.order-card-title {
    background: transparent;
    border: none;
    color: var(--accent-bg);
    font-size: 1.05rem;
    font-weight: 700;
    padding: 0;
    cursor: pointer;
    overflow: hidden;
    text-overflow: ellipsis;
    white-space: nowrap;
    max-width: 100%;
}

.order-card-fields {
    display: flex;
    flex-direction: column;
    gap: 0.35rem;
    margin-top: 0.75rem;
}

.order-card-field {
    display: flex;
    gap: 0.5rem;
    align-items: flex-start;
    font-size: 0.85rem;
}

.order-card-label {
    font-weight: 600;
    min-width: 7rem;
    flex-shrink: 0;
}

.notice {
    position: fixed;
    left: 50%;
    bottom: 1.25rem;
    transform: translateX(-50%);
    padding: 0.6rem 1.1rem;
    border-radius: var(--radius-md);
    box-shadow: var(--shadow-lg);
    color: var(--accent-text);
    z-index: 1100;
}

.notice-success {
    background: var(--success-bg);
}

.notice-warning {
    background: var(--warning-bg);
}

.notice-error {
    background: var(--danger-bg);
}

.dialog-scrim {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.6);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 1000;
}

.dialog {
    width: min(26rem, calc(100vw - 2rem));
    background: var(--bg-secondary);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-md);
    box-shadow: var(--shadow-lg);
    padding: 1.25rem;
    display: flex;
    flex-direction: column;
    gap: 0.9rem;
}

.dialog-title {
    margin: 0;
}

.dialog-subtitle {
    margin: 0;
    color: var(--text-secondary);
    font-size: 0.85rem;
}

.dialog-actions {
    display: flex;
    justify-content: flex-end;
    gap: 0.6rem;
}

.detail-scrim {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.6);
    display: flex;
    justify-content: flex-end;
    z-index: 900;
}

.detail-panel {
    width: min(34rem, 100vw);
    height: 100%;
    overflow-y: auto;
    background: var(--bg-secondary);
    border-left: 1px solid var(--border-color);
    padding: 1.25rem;
    display: flex;
    flex-direction: column;
    gap: 0.9rem;
}

.detail-head {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.detail-head h3 {
    margin: 0;
    flex: 1;
}

.detail-field {
    display: flex;
    gap: 0.5rem;
    font-size: 0.85rem;
}

.detail-field span:first-child {
    font-weight: 600;
    min-width: 8rem;
}

.detail-item {
    border: 1px solid var(--border-color);
    border-radius: var(--radius-md);
    padding: 0.75rem;
    display: flex;
    gap: 0.75rem;
}

.detail-item img {
    width: 72px;
    height: 72px;
    object-fit: contain;
    border-radius: var(--radius-sm);
    background: #f9f9f9;
}

.detail-item-meta {
    font-size: 0.82rem;
    color: var(--text-secondary);
}

.signin-boundary {
    min-height: 100dvh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
}

.signin-card {
    width: min(22rem, 100%);
    background: var(--bg-secondary);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-md);
    padding: 1.5rem;
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    text-align: center;
}

.signin-card h2 {
    margin: 0;
}

.signin-card p {
    margin: 0;
    color: var(--text-secondary);
}
"#;
