use async_step::Step;

#[test]
fn value_is_non_terminal() {
    let step = Step::value(7);
    assert!(!step.done);
    assert_eq!(step.value, Some(7));
}

#[test]
fn done_carries_no_value() {
    let step: Step<i32> = Step::done();
    assert!(step.done);
    assert_eq!(step.value, None);
}

#[test]
fn done_with_carries_a_final_value() {
    let step = Step::done_with("end");
    assert!(step.done);
    assert_eq!(step.value, Some("end"));
}
