pub mod random_buffer;
