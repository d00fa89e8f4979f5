// Domain layer: data model and ports. Nothing here talks to the network or the filesystem.

pub mod model;
pub mod ports;
