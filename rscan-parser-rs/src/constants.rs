/// step_size, line_size, line_count, point_count, line_start, point_start
pub const HEADER_LEN: usize = 6;
pub const BYTES_PER_SAMPLE: usize = 4;

/// Raw samples are in centimeters.
pub const DEFAULT_SCALE: f64 = 1e-2;
/// One stepper motor step, both axes.
pub const DEFAULT_STEP_ANGLE_DEG: f64 = 1.8;
