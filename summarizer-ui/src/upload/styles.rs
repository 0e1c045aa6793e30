pub const UPLOAD_STYLES: &str = r#"
.hidden {
    display: none !important;
}

/* Panel */
.upload-container {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    max-width: 40rem;
    margin: 0 auto;
    padding: 1.5rem;
    background: var(--panel-bg, #1e293b);
    border: 1px solid var(--border-color, #334155);
    border-radius: var(--radius-lg, 12px);
    color: var(--text-primary, #f8fafc);
}

.upload-title {
    margin: 0;
    font-size: 1.25rem;
    font-weight: 600;
}

/* Picker */
.file-input {
    display: none;
}

.file-label {
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1.25rem;
    border: 2px dashed var(--border-color, #334155);
    border-radius: var(--radius-md, 8px);
    color: var(--text-secondary, #94a3b8);
    cursor: pointer;
    word-break: break-all;
}

.file-label:hover {
    border-color: var(--accent-bg, #3b82f6);
    color: var(--text-primary, #f8fafc);
}

.summarize-button {
    align-self: flex-start;
    padding: 0.5rem 1.25rem;
    background: var(--accent-bg, #3b82f6);
    color: white;
    border: none;
    border-radius: var(--radius-md, 8px);
    font-weight: 600;
    cursor: pointer;
}

.summarize-button:disabled {
    opacity: 0.5;
    cursor: wait;
}

/* Lifecycle */
.loading {
    color: var(--text-secondary, #94a3b8);
    font-style: italic;
}

.result {
    padding: 1rem;
    background: var(--result-bg, #0f172a);
    border-radius: var(--radius-md, 8px);
}

.result-text {
    margin: 0;
    white-space: pre-wrap;
    line-height: 1.5;
}
"#;
