//! Stylesheet injected once per document.

/// Toolbar and macro dialog rules, themed through the host's CSS variables.
pub(crate) const STYLESHEET: &str = r"
.cc-toolbar {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 4px;
  margin-bottom: 8px;
  padding: 6px 8px;
  border: 1px solid var(--borderColor-default, #d0d7de);
  border-radius: 6px;
  background: var(--bgColor-muted, #f6f8fa);
}
.cc-group { display: inline-flex; flex-wrap: wrap; align-items: center; gap: 4px; }
.cc-divider { align-self: stretch; width: 1px; margin: 0 6px; background: var(--borderColor-default, #d0d7de); }
.cc-chip {
  display: inline-flex;
  align-items: center;
  gap: 4px;
  padding: 3px 8px;
  border: 1px solid var(--borderColor-default, #d0d7de);
  border-radius: 6px;
  background: var(--bgColor-default, #fff);
  color: var(--fgColor-default, #1f2328);
  font-size: 12px;
  cursor: pointer;
}
.cc-chip:hover { border-color: var(--borderColor-emphasis, #818b98); }
.cc-chip.cc-on {
  border-color: var(--cc-accent, var(--borderColor-accent-emphasis, #0969da));
  box-shadow: inset 0 -2px 0 var(--cc-accent, #0969da);
}
.cc-chip-small { padding: 1px 6px; font-size: 11px; }
.cc-macro { background: var(--bgColor-attention-muted, #fff8c5); }
.cc-macro-edit { display: none; padding: 0 3px; border: 0; background: none; cursor: pointer; opacity: 0.7; }
.cc-macro:hover .cc-macro-edit { display: inline; }
.cc-macro-add { border-style: dashed; }
.cc-backdrop {
  position: fixed;
  inset: 0;
  z-index: 9999;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.45);
}
.cc-dialog {
  width: min(480px, 92vw);
  padding: 20px;
  border: 1px solid var(--borderColor-default, #d0d7de);
  border-radius: 12px;
  background: var(--bgColor-default, #fff);
  color: var(--fgColor-default, #1f2328);
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2);
}
.cc-dialog h3 { margin: 0 0 14px; font-size: 16px; }
.cc-field { margin-bottom: 14px; }
.cc-field > label { display: block; margin-bottom: 4px; font-size: 12px; color: var(--fgColor-muted, #59636e); }
.cc-field input[type=text], .cc-field select, .cc-field textarea {
  box-sizing: border-box;
  width: 100%;
  padding: 6px 10px;
  border: 1px solid var(--borderColor-default, #d0d7de);
  border-radius: 6px;
  background: var(--bgColor-default, #fff);
  color: inherit;
  font: inherit;
}
.cc-field textarea { min-height: 80px; resize: vertical; }
.cc-field input.cc-invalid { border-color: var(--borderColor-danger-emphasis, #cf222e); }
.cc-checks { display: flex; flex-wrap: wrap; gap: 10px; font-size: 12px; }
.cc-preview {
  padding: 10px;
  border-radius: 6px;
  background: var(--bgColor-muted, #f6f8fa);
  font-size: 13px;
  word-break: break-word;
}
.cc-actions { display: flex; justify-content: flex-end; gap: 8px; margin-top: 18px; }
.cc-action { padding: 6px 14px; border: 1px solid var(--borderColor-default, #d0d7de); border-radius: 6px; background: var(--bgColor-default, #fff); color: inherit; cursor: pointer; }
.cc-action-primary { border-color: transparent; background: var(--bgColor-accent-emphasis, #0969da); color: #fff; }
.cc-action-danger { margin-right: auto; border-color: transparent; background: var(--bgColor-danger-emphasis, #cf222e); color: #fff; }
";
