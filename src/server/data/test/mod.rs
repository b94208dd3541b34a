mod assignment;
mod creature;
