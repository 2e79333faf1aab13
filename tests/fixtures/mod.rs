pub mod java;
