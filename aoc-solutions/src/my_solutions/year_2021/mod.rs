pub mod day_1;
pub mod day_2;
pub mod day_3;
pub mod day_4;
pub mod day_5;
pub mod day_6;
pub mod day_7;
pub mod day_9;
pub mod day_10;
pub mod day_11;
pub mod day_13;
