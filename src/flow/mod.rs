//! Live-Strömungsdaten: Frame-Typ, Ein-Slot-Konsument, Demo-Quelle.

pub mod consumer;
pub mod frame;
pub mod source;

pub use consumer::{ConnectionStatus, FlowConsumer, FlowEvent, FrameSlot};
pub use frame::{FlowFrame, RawFrame};
pub use source::FlowSourceHandle;
