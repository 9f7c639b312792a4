//! Mock implementations of simulator seams.

use mockall::mock;
use xsim_core::io::Console;

mock! {
    pub Console {}

    impl Console for Console {
        fn put(&mut self, reg: usize, value: i16);
    }
}
