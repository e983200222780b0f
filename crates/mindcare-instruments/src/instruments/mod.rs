pub mod dass21;
