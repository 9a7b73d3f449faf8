/// Chat completion body as returned by the OpenAI API for the opening turn of
/// an interview.
pub fn openai_completion_fixture() -> &'static str {
    return r#"
{
  "id": "chatcmpl-8Ff2t7Zq1Q0mYw1xXl9n2a3b4c5d6",
  "object": "chat.completion",
  "created": 1698748800,
  "model": "gpt-3.5-turbo-0613",
  "choices": [
    {
      "index": 0,
      "message": {
        "role": "assistant",
        "content": "Hello! Thanks for joining. Could you start by introducing yourself?"
      },
      "finish_reason": "stop"
    }
  ],
  "usage": {
    "prompt_tokens": 131,
    "completion_tokens": 14,
    "total_tokens": 145
  }
}
"#
    .trim();
}
