pub mod layer_sink;
pub mod nominatim;
