//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Notepad Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# width = 600            # 200-7680
# height = 400           # 150-4320
# title_suffix = "Notepad"

[editor]
# font_size = 14         # 8-48
# monospace = true
# word_wrap = true
# untitled_name = "Untitled"

[assistant]
# Questions start with "-"; a question starting with "- >>" continues
# the previous conversation.
enabled = true
# model = "gemini-2.0-flash"
# api_key_env = "GEMINI_API_KEY"
# max_tokens = 4096      # 1-65536
# temperature = 0.7      # 0.0-2.0
# max_in_flight = 1      # 1-8
# request_timeout_secs = 120  # 5-600
# trigger_scope = "buffer"    # buffer, line

[keybinds]
# new_file = "Cmd+N"
# open_file = "Cmd+O"
# save_file = "Cmd+S"
# save_file_as = "Cmd+Shift+S"
# quit = "Cmd+Q"
# ask_assistant = "Ctrl+Enter"
# cancel_requests = "Escape"

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
}
