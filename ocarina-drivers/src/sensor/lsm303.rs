//! LSM303AGR accelerometer and magnetometer
//!
//! Thin wrapper over the `lsm303agr` driver for the combined motion
//! sensor on the micro:bit v2. Sets up the modes the game needs
//! (accelerometer at 100 Hz, ±2 g high resolution; magnetometer
//! continuous at 10 Hz) and hands back readings as [`Vector3`].

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use lsm303agr::interface::I2cInterface;
use lsm303agr::mode::{MagContinuous, MagOneShot};
use lsm303agr::{
    AccelMode, AccelOutputDataRate, AccelScale, Lsm303agr, MagMode, MagOutputDataRate,
};

use super::Vector3;

/// Accelerometer I2C address
const ACCEL_ADDR: u8 = 0x19;
/// Magnetometer I2C address
const MAG_ADDR: u8 = 0x1E;

/// Nanotesla per milligauss
const NT_PER_MILLIGAUSS: i32 = 100;

/// Sensor failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// I2C transfer failed
    Bus,
    /// Driver rejected a setting
    Config,
    /// Device answered with an unexpected identity
    NotFound { address: u8, id: u8 },
}

impl<E> From<lsm303agr::Error<E>> for SensorError {
    fn from(e: lsm303agr::Error<E>) -> Self {
        match e {
            lsm303agr::Error::Comm(_) => SensorError::Bus,
            lsm303agr::Error::InvalidInputData => SensorError::Config,
        }
    }
}

/// Motion sensor in continuous measurement
pub struct MotionSensor<I2C> {
    sensor: Lsm303agr<I2cInterface<I2C>, MagContinuous>,
}

impl<I2C: I2c> MotionSensor<I2C> {
    /// Check both identities and start continuous measurement
    ///
    /// On failure the bus is handed back so the caller can retry.
    pub fn start(i2c: I2C, delay: &mut impl DelayNs) -> Result<Self, (SensorError, I2C)> {
        let mut sensor = Lsm303agr::new_with_i2c(i2c);
        if let Err(e) = configure(&mut sensor, delay) {
            return Err((e, sensor.destroy()));
        }
        match sensor.into_mag_continuous() {
            Ok(sensor) => Ok(Self { sensor }),
            Err(e) => Err((e.error.into(), e.dev.destroy())),
        }
    }

    /// Acceleration in milli-g
    pub fn acceleration(&mut self) -> Result<Vector3, SensorError> {
        let a = self.sensor.acceleration()?;
        Ok(Vector3::new(a.x_mg(), a.y_mg(), a.z_mg()))
    }

    /// Magnetic field in milligauss
    pub fn magnetic_field(&mut self) -> Result<Vector3, SensorError> {
        let m = self.sensor.magnetic_field()?;
        Ok(Vector3::new(
            m.x_nt() / NT_PER_MILLIGAUSS,
            m.y_nt() / NT_PER_MILLIGAUSS,
            m.z_nt() / NT_PER_MILLIGAUSS,
        ))
    }
}

fn configure<I2C: I2c>(
    sensor: &mut Lsm303agr<I2cInterface<I2C>, MagOneShot>,
    delay: &mut impl DelayNs,
) -> Result<(), SensorError> {
    let id = sensor.accelerometer_id()?;
    if !id.is_correct() {
        return Err(SensorError::NotFound {
            address: ACCEL_ADDR,
            id: id.raw(),
        });
    }
    let id = sensor.magnetometer_id()?;
    if !id.is_correct() {
        return Err(SensorError::NotFound {
            address: MAG_ADDR,
            id: id.raw(),
        });
    }

    sensor.init()?;
    sensor.set_accel_mode_and_odr(delay, AccelMode::HighResolution, AccelOutputDataRate::Hz100)?;
    sensor.set_accel_scale(AccelScale::G2)?;
    sensor.set_mag_mode_and_odr(delay, MagMode::HighResolution, MagOutputDataRate::Hz10)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};
    use std::collections::HashMap;

    const WHO_AM_I_A: u8 = 0x0F;
    const CTRL_REG1_A: u8 = 0x20;
    const OUT_X_L_A: u8 = 0x28;
    const WHO_AM_I_M: u8 = 0x4F;
    const OUTX_L_REG_M: u8 = 0x68;

    /// Register file per address
    #[derive(Default)]
    struct FakeBus {
        registers: HashMap<(u8, u8), u8>,
        fail: bool,
    }

    impl ErrorType for FakeBus {
        type Error = ErrorKind;
    }

    impl I2c for FakeBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), ErrorKind> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            let mut pointer = 0u8;
            for op in operations {
                match op {
                    Operation::Write(bytes) => {
                        // Top bit requests auto-increment
                        pointer = bytes[0] & 0x7F;
                        for (i, value) in bytes[1..].iter().enumerate() {
                            self.registers.insert((address, pointer + i as u8), *value);
                        }
                    }
                    Operation::Read(buf) => {
                        for (i, byte) in buf.iter_mut().enumerate() {
                            let reg = pointer + i as u8;
                            *byte = self.registers.get(&(address, reg)).copied().unwrap_or(0);
                        }
                    }
                }
            }
            Ok(())
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn bus_with_ids() -> FakeBus {
        let mut bus = FakeBus::default();
        bus.registers.insert((ACCEL_ADDR, WHO_AM_I_A), 0x33);
        bus.registers.insert((MAG_ADDR, WHO_AM_I_M), 0x40);
        bus
    }

    fn started(bus: FakeBus) -> MotionSensor<FakeBus> {
        match MotionSensor::start(bus, &mut NoDelay) {
            Ok(sensor) => sensor,
            Err((e, _)) => panic!("start failed: {:?}", e),
        }
    }

    #[test]
    fn test_start_sets_accel_rate() {
        let sensor = started(bus_with_ids());
        let bus = sensor.sensor.destroy();
        // Output data rate in the top nibble: 0b0101 is 100 Hz
        let ctrl1 = bus.registers[&(ACCEL_ADDR, CTRL_REG1_A)];
        assert_eq!(ctrl1 >> 4, 0b0101);
    }

    #[test]
    fn test_start_wrong_identity_returns_bus() {
        let mut bus = bus_with_ids();
        bus.registers.insert((MAG_ADDR, WHO_AM_I_M), 0x3D);
        let Err((e, bus)) = MotionSensor::start(bus, &mut NoDelay) else {
            panic!("expected identity failure");
        };
        assert_eq!(
            e,
            SensorError::NotFound {
                address: MAG_ADDR,
                id: 0x3D
            }
        );
        assert_eq!(bus.registers[&(MAG_ADDR, WHO_AM_I_M)], 0x3D);
    }

    #[test]
    fn test_bus_error() {
        let mut bus = bus_with_ids();
        bus.fail = true;
        let Err((e, _)) = MotionSensor::start(bus, &mut NoDelay) else {
            panic!("expected bus failure");
        };
        assert_eq!(e, SensorError::Bus);
    }

    #[test]
    fn test_acceleration_in_mg() {
        let mut bus = bus_with_ids();
        // 12-bit samples left-justified, 1 mg per LSB at ±2 g
        let x = (1000i16 << 4).to_le_bytes();
        let z = (-1000i16 << 4).to_le_bytes();
        for (i, byte) in [x[0], x[1], 0, 0, z[0], z[1]].iter().enumerate() {
            bus.registers.insert((ACCEL_ADDR, OUT_X_L_A + i as u8), *byte);
        }
        let mut sensor = started(bus);
        assert_eq!(sensor.acceleration().unwrap(), Vector3::new(1000, 0, -1000));
    }

    #[test]
    fn test_magnetic_field_in_milligauss() {
        let mut bus = bus_with_ids();
        // 1.5 mG per LSB
        let x = 200i16.to_le_bytes();
        let y = (-100i16).to_le_bytes();
        for (i, byte) in [x[0], x[1], y[0], y[1], 0, 0].iter().enumerate() {
            bus.registers.insert((MAG_ADDR, OUTX_L_REG_M + i as u8), *byte);
        }
        let mut sensor = started(bus);
        assert_eq!(sensor.magnetic_field().unwrap(), Vector3::new(300, -150, 0));
    }

    #[test]
    fn test_driver_errors_map() {
        let bus: lsm303agr::Error<ErrorKind> = lsm303agr::Error::Comm(ErrorKind::Other);
        assert_eq!(SensorError::from(bus), SensorError::Bus);
        let config: lsm303agr::Error<ErrorKind> = lsm303agr::Error::InvalidInputData;
        assert_eq!(SensorError::from(config), SensorError::Config);
    }
}
