//! Trivial arithmetic subjects for the lessons.

use std::time::Duration;

pub fn sum(a: i32, b: i32) -> i32 {
    a + b
}

pub fn subtract(a: i32, b: i32) -> i32 {
    a - b
}

pub async fn sum_async(a: i32, b: i32) -> i32 {
    tokio::time::sleep(Duration::from_millis(1)).await;
    sum(a, b)
}

pub async fn subtract_async(a: i32, b: i32) -> i32 {
    tokio::time::sleep(Duration::from_millis(1)).await;
    subtract(a, b)
}
