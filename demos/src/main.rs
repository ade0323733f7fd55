//! Lesson-style walkthrough of the framework, smallest surface first:
//! eager `test(...)` calls, awaited bodies, a recorded function double,
//! manually registered suites, and finally the `#[def_test]` registry.

mod math;
mod thumb_war;

#[macro_use]
extern crate log;

use std::process::exit;

use microtest::{def_test, expect, run_suites, suite, test, test_async};
use microtest::{MockFn, TestResult, TestRunner};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    info!("one eager test per call, pass or fail, never a crash");

    test("sum adds numbers", || expect(math::sum(3, 7)).to_be(10));
    test("subtract subtracts numbers", || {
        expect(math::subtract(7, 3)).to_be(4)
    });

    test_async("sum_async adds numbers asynchronously", async {
        let result = math::sum_async(3, 7).await;
        expect(result).to_be(10)
    });
    test_async("subtract_async subtracts numbers asynchronously", async {
        let result = math::subtract_async(7, 3).await;
        expect(result).to_be(4)
    });

    test("returns winner", || {
        let get_winner = MockFn::new(|(p1, _): &(String, String)| Some(p1.clone()));
        let winner = thumb_war::play("React", "Svelte", |a, b| {
            get_winner.call((a.to_owned(), b.to_owned()))
        });
        expect(winner).to_be("React".to_owned())?;
        expect(get_winner.calls()).to_be(vec![
            ("React".to_owned(), "Svelte".to_owned()),
            ("React".to_owned(), "Svelte".to_owned()),
        ])?;
        get_winner.reset();
        expect(get_winner.call_count()).to_be(0)
    });

    test("a real game still ends with one of the players", || {
        let winner = thumb_war::play("ken", "ryu", thumb_war::random_winner);
        expect(winner == "ken" || winner == "ryu").to_be(true)
    });

    info!("manually registered suites, run through an injected runner");

    let mut runner = TestRunner::new();
    run_suites!(runner, [MATH_SUITE, GAME_SUITE]);

    if microtest::tests_failed() {
        error!("eager demo tests failed");
        exit(1);
    }

    info!("tests registered with #[def_test], collected at link time");

    if !microtest::test_run_ok() {
        error!("registered demo tests failed");
        exit(1);
    }
}

// Manual suite registration

fn sum_handles_negatives() -> TestResult {
    expect(math::sum(-2, -3)).to_be(-5)?;
    Ok(())
}

fn subtract_can_go_below_zero() -> TestResult {
    expect(math::subtract(3, 7)).to_be(-4)?;
    Ok(())
}

suite!(MATH_SUITE; sum_handles_negatives, subtract_can_go_below_zero);

fn rigged_game_records_every_round() -> TestResult {
    let get_winner = MockFn::new(|(_, p2): &(String, String)| Some(p2.clone()));
    let winner = thumb_war::play("React", "Svelte", |a, b| {
        get_winner.call((a.to_owned(), b.to_owned()))
    });
    expect(winner).to_be("Svelte".to_owned())?;
    expect(get_winner.call_count()).to_be(2)?;
    Ok(())
}

suite!(GAME_SUITE; rigged_game_records_every_round);

// Registered tests, collected by #[def_test]

#[def_test]
fn registered_addition() -> TestResult {
    expect(math::sum(2, 2)).to_be(4)?;
    Ok(())
}

#[def_test]
async fn registered_delayed_addition() -> TestResult {
    let result = math::sum_async(2, 2).await;
    expect(result).to_be(4)?;
    Ok(())
}

#[def_test(ignore)]
fn registered_but_skipped() {
    unreachable!("ignored tests never execute");
}

#[def_test(should_panic)]
fn registered_out_of_bounds_panics() {
    let rounds: Vec<i32> = Vec::new();
    let _ = rounds[3];
}
