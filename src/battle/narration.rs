use crate::battle::state::{Encounter, EventBus};
use serde_json::json;
use std::io::{self, Write};

/// Receives the events of each battle step as they happen.
pub trait Narrator {
    fn narrate(&mut self, encounter: &Encounter, events: &EventBus) -> io::Result<()>;
}

/// Writes the human-readable play-by-play, one line per visible event.
#[derive(Debug)]
pub struct TextNarrator<W: Write> {
    out: W,
}

impl<W: Write> TextNarrator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Narrator for TextNarrator<W> {
    fn narrate(&mut self, encounter: &Encounter, events: &EventBus) -> io::Result<()> {
        for line in events.formatted_lines(encounter) {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()
    }
}

/// Writes one JSON object per event (`{"event": .., "text": ..}`).
#[derive(Debug)]
pub struct JsonNarrator<W: Write> {
    out: W,
}

impl<W: Write> JsonNarrator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Narrator for JsonNarrator<W> {
    fn narrate(&mut self, encounter: &Encounter, events: &EventBus) -> io::Result<()> {
        for event in events.events() {
            let record = json!({
                "event": event,
                "text": event.format(encounter),
            });
            serde_json::to_writer(&mut self.out, &record)?;
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}
