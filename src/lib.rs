pub mod photostat_core;
