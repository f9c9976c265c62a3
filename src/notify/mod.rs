//! External notification channel
//!
//! Carries information requests out of the engine and acknowledgements back.

mod channel;

pub use channel::{
    AckReceiver, Acknowledgement, InformationRequest, NotificationChannel, RecordingChannel,
    TokioChannel,
};
