pub mod year_2021;
