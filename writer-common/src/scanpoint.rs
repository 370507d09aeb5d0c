#[derive(Clone, PartialEq, Debug)]
pub struct ScanPoint {
    pub line: u8,     // scan line (inclination step)
    pub point: u8,    // position along the line (azimuth step)
    pub sample: u32,  // raw distance sample as read from the file
    pub radius: f64,  // sample after scaling
    pub x: f64,       // cartesian coordinates (right-handed coordinate system)
    pub y: f64,       //
    pub z: f64,       //
}

impl ScanPoint {
    pub fn get_csv_header() -> String {
        "index,line,point,sample,radius,x,y,z".to_string()
    }

    pub fn to_csv_string(&self, index: usize) -> String {
        format!(
            "{},{},{},{},{},{},{},{}",
            index,
            self.line,
            self.point,
            self.sample,
            self.radius,
            self.x,
            self.y,
            self.z,
        )
    }
}
