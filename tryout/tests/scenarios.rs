//! End-to-end scenarios chaining factories, combinators and terminals.

use std::collections::HashMap;
use std::error::Error as StdError;

use anyhow::{Result, anyhow, ensure};
use rstest::{fixture, rstest};
use test_helpers::outcome::{expect_fault, expect_success};
use tryout::{
    Fault, FaultKind, Outcome, OutcomeOptionExt, coll_must_have_some_one, failure, lift, success,
    test, test_with_message, tried,
};

#[rstest]
fn doubling_a_success() -> Result<()> {
    ensure!(success(5).map(|x| x * 2).or_throw()? == 10);
    Ok(())
}

#[rstest]
fn doubling_a_failure_reraises_boom() -> Result<()> {
    let err = failure::<i32>("boom")
        .map(|x| x * 2)
        .or_throw()
        .err()
        .ok_or_else(|| anyhow!("expected a fault"))?;
    ensure!(err.message() == "boom", "unexpected message {err}");
    Ok(())
}

#[rstest]
fn lifting_nothing_reraises_null_value() -> Result<()> {
    let err = lift::<u8>(None)
        .or_throw()
        .err()
        .ok_or_else(|| anyhow!("expected a fault"))?;
    ensure!(err.to_string() == "value must not be empty!");
    Ok(())
}

#[rstest]
fn testing_signs() -> Result<()> {
    ensure!(test(4, |x| *x > 0) == success(4));
    expect_fault(
        test_with_message(-1, |x| *x > 0, "must be positive"),
        FaultKind::Validation,
        "must be positive",
    )?;
    Ok(())
}

#[rstest]
fn filtering_loses_the_rejected_value() -> Result<()> {
    expect_fault(
        success(4).filter(|x| *x > 10),
        FaultKind::PredicateRejection,
        "value must not be empty!",
    )?;
    Ok(())
}

#[fixture]
fn settings() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("port", "8080"),
        ("workers", "0"),
        ("timeout", "soon"),
        ("hosts", "a.example,b.example"),
    ])
}

fn setting(settings: HashMap<&'static str, &'static str>, key: &str) -> Outcome<&'static str> {
    settings
        .into_iter()
        .find_map(|(name, value)| (name == key).then_some(value))
        .lift()
}

#[rstest]
fn parsing_a_valid_setting(settings: HashMap<&'static str, &'static str>) -> Result<()> {
    let port = setting(settings, "port")
        .try_map(str::parse::<u16>)
        .filter_or(|p| *p >= 1024, "port must be unprivileged");
    ensure!(expect_success(port)? == 8080);
    Ok(())
}

#[rstest]
#[case::missing("retries", FaultKind::NullValue, "value must not be empty!")]
#[case::unparsable("timeout", FaultKind::Caught, "invalid digit found in string")]
#[case::rejected("workers", FaultKind::Validation, "workers must be at least one")]
fn settings_fail_with_their_origin(
    settings: HashMap<&'static str, &'static str>,
    #[case] key: &str,
    #[case] kind: FaultKind,
    #[case] message: &str,
) -> Result<()> {
    let parsed = setting(settings, key)
        .try_map(str::parse::<u32>)
        .flat_map(|count| {
            test_with_message(count, |c| *c >= 1, format!("{key} must be at least one"))
        });
    expect_fault(parsed, kind, message)?;
    Ok(())
}

#[rstest]
fn splitting_a_list_setting(settings: HashMap<&'static str, &'static str>) -> Result<()> {
    let hosts = setting(settings, "hosts")
        .map(|raw| raw.split(',').map(str::to_owned).collect::<Vec<_>>())
        .flat_map(|hosts| coll_must_have_some_one(Some(hosts)));
    ensure!(expect_success(hosts)? == ["a.example", "b.example"]);
    Ok(())
}

#[rstest]
fn observing_and_consuming_a_failure() {
    let mut log = Vec::new();
    let outcome = tried("0x1F", |raw: &str| u8::from_str_radix(raw, 16))
        .if_present(|_| log.push("present".to_owned()))
        .if_throwable(|fault| log.push(format!("{}: {fault}", fault.kind())));
    assert_eq!(log, ["caught: invalid digit found in string"]);
    assert_eq!(outcome.optional(), None);
}

#[rstest]
fn reraising_keeps_the_original_error_reachable() -> Result<()> {
    fn load(raw: &str) -> std::result::Result<u16, Fault> {
        tried(raw, str::parse::<u16>).or_throw()
    }

    let fault = load("seventy").err().ok_or_else(|| anyhow!("expected a fault"))?;
    let source = fault.source().ok_or_else(|| anyhow!("cause should be chained"))?;
    ensure!(source.downcast_ref::<std::num::ParseIntError>().is_some());

    let err: anyhow::Error = load("70000").err().ok_or_else(|| anyhow!("expected a fault"))?.into();
    ensure!(err.downcast_ref::<Fault>().is_some());
    Ok(())
}

#[rstest]
fn consuming_with_if_present_or_throw() -> Result<()> {
    let mut total = 0;
    success(3).if_present_or_throw(|v| -> Result<()> {
        total += v;
        Ok(())
    })?;
    ensure!(total == 3);

    let outcome: Outcome<i32> = failure("boom");
    let err = outcome
        .if_present_or_throw(|_| -> Result<()> { Ok(()) })
        .err()
        .ok_or_else(|| anyhow!("expected the fault to be raised"))?;
    ensure!(err.to_string() == "boom");
    Ok(())
}
