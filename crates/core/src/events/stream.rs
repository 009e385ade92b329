//! Newline-delimited JSON event decoding

use super::{DisplayMessage, EngineEvent};
use crate::errors::{Error, Result};
use std::io::{self, BufRead};
use tracing::debug;

/// Iterator over the engine events found on a line-oriented reader.
///
/// Lines that are not JSON objects are the engine's ordinary chatter and come
/// out as [`EngineEvent::Display`] so they reach the suppression layer. Bytes
/// that are not valid UTF-8 are replaced rather than ending the stream. In
/// lenient mode (the default) a malformed JSON object is treated the same
/// way; in strict mode it ends the stream with [`Error::EventDecode`].
pub struct EventStream<R> {
    reader: R,
    line: usize,
    strict: bool,
    buf: Vec<u8>,
}

impl<R: BufRead> EventStream<R> {
    /// Create a lenient stream
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            strict: false,
            buf: Vec::new(),
        }
    }

    /// Create a stream that rejects malformed JSON objects
    pub fn strict(reader: R) -> Self {
        Self {
            strict: true,
            ..Self::new(reader)
        }
    }

    fn decode(&self, text: &str) -> Result<EngineEvent> {
        if !text.starts_with('{') {
            return Ok(EngineEvent::Display(DisplayMessage::raw(text)));
        }

        match serde_json::from_str::<EngineEvent>(text) {
            Ok(event) => Ok(event),
            Err(source) if self.strict => Err(Error::event_decode(self.line, source)),
            Err(source) => {
                debug!(line = self.line, error = %source, "treating undecodable event as display output");
                Ok(EngineEvent::Display(DisplayMessage::raw(text)))
            }
        }
    }
}

impl<R: BufRead> Iterator for EventStream<R> {
    type Item = Result<EngineEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Some(Err(Error::io("reading event stream", e))),
            }
            self.line += 1;

            let decoded = String::from_utf8_lossy(&self.buf);
            let text = decoded.trim_end_matches(['\r', '\n']);
            if text.trim().is_empty() {
                continue;
            }
            return Some(self.decode(text));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(input: &str) -> Vec<EngineEvent> {
        EventStream::new(Cursor::new(input.to_string()))
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_stream_decodes_events_in_order() {
        let events = collect(concat!(
            "{\"event\":\"play_start\",\"name\":\"Provision\"}\n",
            "\n",
            "{\"event\":\"task_start\",\"name\":\"Set hostname\"}\n",
            "{\"event\":\"runner_ok\",\"result\":{\"changed\":true}}\n",
        ));
        let kinds: Vec<_> = events.iter().map(EngineEvent::kind).collect();
        assert_eq!(kinds, vec!["play_start", "task_start", "runner_ok"]);
    }

    #[test]
    fn test_plain_text_becomes_display() {
        let events = collect("PLAY RECAP *********\n");
        assert_eq!(
            events,
            vec![EngineEvent::Display(DisplayMessage::raw("PLAY RECAP *********"))]
        );
    }

    #[test]
    fn test_lenient_stream_routes_bad_json_to_display() {
        let events = collect("{\"event\":\"unknown\"}\n");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind(), "display");
    }

    #[test]
    fn test_strict_stream_reports_line_number() {
        let input = "{\"event\":\"play_start\",\"name\":\"p\"}\n{not json\n";
        let mut stream = EventStream::strict(Cursor::new(input.to_string()));
        assert!(stream.next().unwrap().is_ok());
        match stream.next().unwrap() {
            Err(Error::EventDecode { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_chatter_does_not_end_the_stream() {
        let mut input = b"caf\xe9 au lait\n".to_vec();
        input.extend_from_slice(b"{\"event\":\"task_start\",\"name\":\"Create user\"}\n");
        input.extend_from_slice(b"{\"event\":\"runner_ok\",\"result\":{}}\n");

        let events = EventStream::new(Cursor::new(input))
            .collect::<Result<Vec<_>>>()
            .unwrap();
        let kinds: Vec<_> = events.iter().map(EngineEvent::kind).collect();
        assert_eq!(kinds, vec!["display", "task_start", "runner_ok"]);
        match &events[0] {
            EngineEvent::Display(message) => assert!(message.msg.starts_with("caf")),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_null_conditional_flag_still_starts_task() {
        let events = collect(concat!(
            "{\"event\":\"task_start\",\"name\":\"Create user\"}\n",
            "{\"event\":\"runner_ok\",\"result\":{}}\n",
            "{\"event\":\"task_start\",\"name\":\"Copy dotfiles\",\"is_conditional\":null}\n",
            "{\"event\":\"runner_ok\",\"result\":null}\n",
        ));
        let kinds: Vec<_> = events.iter().map(EngineEvent::kind).collect();
        assert_eq!(kinds, vec!["task_start", "runner_ok", "task_start", "runner_ok"]);
    }

    #[test]
    fn test_crlf_line_endings_are_accepted() {
        let events = collect("{\"event\":\"task_start\",\"name\":\"Update npm\"}\r\n");
        assert_eq!(
            events,
            vec![EngineEvent::TaskStart {
                name: "Update npm".to_string(),
                is_conditional: false,
            }]
        );
    }
}
