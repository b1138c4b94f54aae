mod in_memory_transcript_store;
mod recording_transcript_store;

pub use in_memory_transcript_store::InMemoryTranscriptStore;
pub use recording_transcript_store::RecordingTranscriptStore;
