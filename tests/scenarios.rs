//! End-to-end runs driven by scripts.

use vendfsm::input::{FnSource, InputEvent, ScriptedInput};
use vendfsm::machine::{Controller, ControllerState};
use vendfsm::output::{ConsoleSink, RecordingSink};

fn run_script(text: &str) -> Controller<RecordingSink> {
    let mut source = ScriptedInput::parse(text).unwrap();
    let mut controller = Controller::new(RecordingSink::new());
    controller.run(&mut source).unwrap();
    controller
}

#[test]
fn quarter_dollar_soda() {
    let controller = run_script("QUARTER; DOLLAR; SODA; STOP");

    assert_eq!(
        controller.sink().lines(),
        vec!["dispense SODA", "change: 25", "halted"]
    );
    assert_eq!(
        controller.history().get_path(),
        vec![
            &ControllerState::Resting,
            &ControllerState::AddingMoney,
            &ControllerState::AddingMoney,
            &ControllerState::Dispensing,
            &ControllerState::GivingChange,
            &ControllerState::Resting,
            &ControllerState::Terminal,
        ]
    );
}

#[test]
fn several_customers() {
    let script = "
        # customer one: exact change for soap
        QUARTER; QUARTER; SOAP;
        # customer two: tries toothpaste, gives up
        DOLLAR; TOOTHPASTE; ABORT_TRANSACTION;
        # customer three: chips with change
        DOLLAR; CHIPS;
        STOP
    ";
    let controller = run_script(script);

    assert_eq!(
        controller.sink().lines(),
        vec![
            "dispense SOAP",
            "insufficient funds for TOOTHPASTE: price 200, inserted 100",
            "change: 100",
            "dispense CHIPS",
            "change: 25",
            "halted",
        ]
    );
    assert_eq!(controller.steps(), 9);
}

#[test]
fn selection_before_money_is_silent() {
    let controller = run_script("SODA; ABORT; NICKEL; STOP");

    assert_eq!(controller.sink().lines(), vec!["halted"]);
    assert_eq!(controller.snapshot().amount, 5);
}

#[test]
fn exhausted_script_shuts_down() {
    let controller = run_script("DIME; DIME");

    assert_eq!(controller.state(), ControllerState::Terminal);
    assert_eq!(controller.steps(), 3);
}

#[test]
fn console_output_matches_display() {
    let mut source = FnSource({
        let mut events = vec![InputEvent::Stop, InputEvent::Soap, InputEvent::Dollar].into_iter();
        move || events.next_back().unwrap_or(InputEvent::Stop)
    });
    let mut controller = Controller::new(ConsoleSink::new(Vec::new()));

    controller.run(&mut source).unwrap();

    let text = String::from_utf8(controller.into_sink().into_inner()).unwrap();
    assert_eq!(text, "dispense SOAP\nchange: 50\nhalted\n");
}
