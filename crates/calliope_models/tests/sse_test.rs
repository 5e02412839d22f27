// Tests for server-sent event parsing of streamed chat completions.

use calliope_models::openai::{SsePayload, parse_sse_line};

#[test]
fn data_line_yields_delta() -> anyhow::Result<()> {
    let line = r#"data: {"choices":[{"delta":{"content":"Once upon"},"finish_reason":null}]}"#;
    assert_eq!(
        parse_sse_line(line)?,
        Some(SsePayload::Delta("Once upon".to_string()))
    );
    Ok(())
}

#[test]
fn done_sentinel_is_recognized() -> anyhow::Result<()> {
    assert_eq!(parse_sse_line("data: [DONE]")?, Some(SsePayload::Done));
    Ok(())
}

#[test]
fn blank_and_comment_lines_are_skipped() -> anyhow::Result<()> {
    assert_eq!(parse_sse_line("")?, None);
    assert_eq!(parse_sse_line("   ")?, None);
    assert_eq!(parse_sse_line(": keep-alive")?, None);
    assert_eq!(parse_sse_line("event: message")?, None);
    Ok(())
}

#[test]
fn role_only_chunk_yields_empty_delta() -> anyhow::Result<()> {
    // The first chunk of a stream carries the role with no content.
    let line = r#"data: {"choices":[{"delta":{},"finish_reason":null}]}"#;
    assert_eq!(parse_sse_line(line)?, Some(SsePayload::Delta(String::new())));
    Ok(())
}

#[test]
fn malformed_json_is_an_error() {
    let result = parse_sse_line("data: {not json");
    assert!(result.is_err());
}

#[test]
fn fragments_accumulate_in_order() -> anyhow::Result<()> {
    let lines = [
        r#"data: {"choices":[{"delta":{"content":"The "}}]}"#,
        r#"data: {"choices":[{"delta":{"content":"forest "}}]}"#,
        "",
        r#"data: {"choices":[{"delta":{"content":"was silent."}}]}"#,
        "data: [DONE]",
    ];

    let mut text = String::new();
    for line in lines {
        if let Some(SsePayload::Delta(delta)) = parse_sse_line(line)? {
            text.push_str(&delta);
        }
    }
    assert_eq!(text, "The forest was silent.");
    Ok(())
}
