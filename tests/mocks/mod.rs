pub mod recording_transport;

pub use recording_transport::RecordingTransport;
