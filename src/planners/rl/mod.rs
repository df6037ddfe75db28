mod encoder;

pub use encoder::ObservationEncoder;
