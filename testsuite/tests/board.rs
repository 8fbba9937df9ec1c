#![no_std]
#![no_main]

use core::cell::RefCell;
use core::sync::atomic::{AtomicUsize, Ordering};

use cortex_m::interrupt::Mutex;
use cortex_m_rt::exception;

use testsuite as _;           // memory layout + panic handler + global logger
use nucleo_blinkspeed as nucleo;

use nucleo::blinker::Blinker;
use nucleo::button::UserButton;
use nucleo::led::UserLed;
use nucleo::pac::interrupt;
use nucleo::systick::SysTick;


// - shared state -------------------------------------------------------------

type Device = Blinker<SysTick, UserLed, UserButton>;

static BLINKER: Mutex<RefCell<Option<Device>>> = Mutex::new(RefCell::new(None));
static TICKS: AtomicUsize = AtomicUsize::new(0);
static EDGES: AtomicUsize = AtomicUsize::new(0);

struct State {
    board: Option<nucleo::Board>,
}

impl State {
    fn init() -> State {
        State {
            board: Some(testsuite::init()),
        }
    }
}

fn with_device<R>(f: impl FnOnce(&mut Device) -> R) -> R {
    cortex_m::interrupt::free(|cs| {
        let mut device = BLINKER.borrow(cs).borrow_mut();
        f(defmt::unwrap!(device.as_mut()))
    })
}

fn wait_for(counter: &AtomicUsize, count: usize) {
    while counter.load(Ordering::Relaxed) < count {
        cortex_m::asm::nop();
    }
}

/// Raises EXTI13 from software, as a button press would.
fn press() {
    let edges = EDGES.load(Ordering::Relaxed);
    let exti = unsafe { &*nucleo::pac::EXTI::ptr() };
    exti.swier.write(|w| w.swier13().set_bit());
    wait_for(&EDGES, edges + 1);
}


// - interrupt handlers -------------------------------------------------------

#[exception]
fn SysTick() {
    cortex_m::interrupt::free(|cs| {
        if let Some(device) = BLINKER.borrow(cs).borrow_mut().as_mut() {
            device.on_tick();
            TICKS.fetch_add(1, Ordering::Relaxed);
        }
    });
}

#[interrupt]
fn EXTI15_10() {
    cortex_m::interrupt::free(|cs| {
        if let Some(device) = BLINKER.borrow(cs).borrow_mut().as_mut() {
            device.on_button_edge();
            EDGES.fetch_add(1, Ordering::Relaxed);
        }
    });
}


// - tests --------------------------------------------------------------------

#[defmt_test::tests]
mod tests {
    use core::sync::atomic::Ordering;

    use cortex_m::peripheral::{NVIC, SYST};
    use defmt::{assert, assert_eq};

    use super::nucleo::pac;
    use super::nucleo::speed::{HIGH_SPEED, LOW_SPEED, MEDIUM_SPEED};
    use super::nucleo::Speed;
    use super::{press, wait_for, with_device, BLINKER, TICKS};

    #[init]
    fn init() -> super::State {
        super::State::init()
    }

    #[test]
    fn board_is_a_singleton() {
        assert!(super::nucleo::Board::take().is_none());
    }

    #[test]
    fn clocks_enabled() {
        let rcc = unsafe { &*pac::RCC::ptr() };
        assert!(rcc.ahb1enr.read().gpioaen().is_enabled());
        assert!(rcc.ahb1enr.read().gpiocen().is_enabled());
        assert!(rcc.apb2enr.read().syscfgen().is_enabled());
    }

    #[test]
    fn led_pin_is_push_pull_output() {
        let gpioa = unsafe { &*pac::GPIOA::ptr() };
        assert!(gpioa.moder.read().moder5().is_output());
        assert!(gpioa.otyper.read().ot5().is_push_pull());
        assert!(gpioa.ospeedr.read().ospeedr5().is_low_speed());
        assert!(gpioa.pupdr.read().pupdr5().is_floating());
    }

    #[test]
    fn button_pin_is_pulled_up_input(state: &mut super::State) {
        let gpioc = unsafe { &*pac::GPIOC::ptr() };
        assert!(gpioc.moder.read().moder13().is_input());
        assert!(gpioc.pupdr.read().pupdr13().is_pull_up());

        let board = defmt::unwrap!(state.board.as_ref());
        assert!(!board.button.is_pressed(), "release B1 while testing");
        assert!(!board.button.is_pending());
    }

    #[test]
    fn start_blinks_fast(state: &mut super::State) {
        let board = defmt::unwrap!(state.board.take());
        let mut blinker = board.into_blinker();

        cortex_m::interrupt::free(|cs| {
            blinker.start();
            BLINKER.borrow(cs).replace(Some(blinker));
        });

        assert_eq!(with_device(|device| device.speed()), Speed::Fast);
        assert_eq!(SYST::get_reload(), HIGH_SPEED.reload_value());

        let syscfg = unsafe { &*pac::SYSCFG::ptr() };
        assert_eq!(syscfg.exticr4.read().exti13().bits(), 0b0010, "EXTI13 on port C");

        let exti = unsafe { &*pac::EXTI::ptr() };
        assert!(exti.imr.read().mr13().bit_is_set());
        assert!(exti.emr.read().mr13().bit_is_clear());
        assert!(exti.rtsr.read().tr13().bit_is_clear());
        assert!(exti.ftsr.read().tr13().bit_is_set());
        assert!(NVIC::is_enabled(pac::Interrupt::EXTI15_10));
    }

    #[test]
    fn tick_toggles_led() {
        let gpioa = unsafe { &*pac::GPIOA::ptr() };
        let ticks = TICKS.load(Ordering::Relaxed);
        let level = gpioa.odr.read().odr5().bit();

        wait_for(&TICKS, ticks + 1);
        assert_eq!(gpioa.odr.read().odr5().bit(), !level);

        wait_for(&TICKS, ticks + 2);
        assert_eq!(gpioa.odr.read().odr5().bit(), level);
    }

    #[test]
    fn press_blinks_medium() {
        press();

        let exti = unsafe { &*pac::EXTI::ptr() };
        assert!(exti.pr.read().pr13().bit_is_clear(), "pending flag cleared");
        assert_eq!(with_device(|device| device.speed()), Speed::Medium);
        assert_eq!(SYST::get_reload(), MEDIUM_SPEED.reload_value());
    }

    #[test]
    fn presses_wrap_to_fast() {
        press();
        assert_eq!(SYST::get_reload(), LOW_SPEED.reload_value());

        press();
        assert_eq!(with_device(|device| device.speed()), Speed::Fast);
        assert_eq!(SYST::get_reload(), HIGH_SPEED.reload_value());
    }

    #[test]
    fn press_keeps_other_lines_pending() {
        // line 0 routes to EXTI0, which stays masked at the NVIC, so its
        // pending bit is only observed here
        let exti = unsafe { &*pac::EXTI::ptr() };
        exti.imr.modify(|_, w| w.mr0().set_bit());
        exti.swier.write(|w| w.swier0().set_bit());
        assert!(exti.pr.read().pr0().bit_is_set());

        press();
        let pr = exti.pr.read();
        let line0_pending = pr.pr0().bit_is_set();
        let line13_pending = pr.pr13().bit_is_set();

        exti.imr.modify(|_, w| w.mr0().clear_bit());
        exti.pr.write(|w| w.pr0().set_bit());
        NVIC::unpend(pac::Interrupt::EXTI0);

        assert!(line0_pending, "clearing line 13 cleared line 0");
        assert!(!line13_pending);
        assert_eq!(with_device(|device| device.speed()), Speed::Medium);
    }

    #[test]
    fn free_returns_configured_peripherals() {
        let device = cortex_m::interrupt::free(|cs| BLINKER.borrow(cs).take());
        let device = defmt::unwrap!(device);
        let speed = device.speed();
        let (systick, led, button) = device.free();

        assert_eq!(systick.reload(), speed.ticks().reload_value());
        assert!(!button.is_pending());

        let gpioa = unsafe { &*pac::GPIOA::ptr() };
        assert_eq!(led.is_on(), gpioa.odr.read().odr5().bit_is_set());
    }
}
