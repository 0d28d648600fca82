// WGS84 helpers for aiming the camera at a point on the ground.

pub const WGS84_A: f64 = 6_378_137.0;
pub const WGS84_F: f64 = 1.0 / 298.257_223_563;
pub const WGS84_E2: f64 = WGS84_F * (2.0 - WGS84_F);

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ecef {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

// Degrees, and meters above the ellipsoid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Geodetic {
    pub lon_deg: f64,
    pub lat_deg: f64,
    pub height_m: f64,
}

impl Geodetic {
    pub fn new(lon_deg: f64, lat_deg: f64, height_m: f64) -> Self {
        Self {
            lon_deg,
            lat_deg,
            height_m,
        }
    }

    pub fn to_ecef(self) -> Ecef {
        let (sin_lat, cos_lat) = self.lat_deg.to_radians().sin_cos();
        let (sin_lon, cos_lon) = self.lon_deg.to_radians().sin_cos();
        let n = WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();
        Ecef {
            x: (n + self.height_m) * cos_lat * cos_lon,
            y: (n + self.height_m) * cos_lat * sin_lon,
            z: (n * (1.0 - WGS84_E2) + self.height_m) * sin_lat,
        }
    }
}

/// Column-major 4x4 matrix, the layout Cesium's `Matrix4.fromColumnMajorArray` expects.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix4(pub [f64; 16]);

impl Matrix4 {
    #[rustfmt::skip]
    pub const IDENTITY: Matrix4 = Matrix4([
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]);
}

/// Columns are east, north, up and the ECEF origin of the local frame.
pub fn east_north_up_to_fixed_frame(origin: Geodetic) -> Matrix4 {
    let (sin_lat, cos_lat) = origin.lat_deg.to_radians().sin_cos();
    let (sin_lon, cos_lon) = origin.lon_deg.to_radians().sin_cos();
    let o = origin.to_ecef();

    let east = [-sin_lon, cos_lon, 0.0];
    let north = [-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat];
    let up = [cos_lat * cos_lon, cos_lat * sin_lon, sin_lat];

    #[rustfmt::skip]
    let m = [
        east[0],  east[1],  east[2],  0.0,
        north[0], north[1], north[2], 0.0,
        up[0],    up[1],    up[2],    0.0,
        o.x,      o.y,      o.z,      1.0,
    ];
    Matrix4(m)
}

#[cfg(test)]
mod tests {
    use super::{Geodetic, Matrix4, WGS84_A, east_north_up_to_fixed_frame};

    fn column(m: &Matrix4, i: usize) -> [f64; 4] {
        let c = i * 4;
        [m.0[c], m.0[c + 1], m.0[c + 2], m.0[c + 3]]
    }

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    fn dot(a: [f64; 4], b: [f64; 4]) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    #[test]
    fn ecef_at_equator_prime_meridian() {
        let ecef = Geodetic::new(0.0, 0.0, 0.0).to_ecef();
        assert_close(ecef.x, WGS84_A, 1e-6);
        assert_close(ecef.y, 0.0, 1e-6);
        assert_close(ecef.z, 0.0, 1e-6);
    }

    #[test]
    fn height_moves_point_along_up_axis() {
        let ground = Geodetic::new(-156.6874, 20.8827, 0.0);
        let raised = Geodetic::new(-156.6874, 20.8827, 30.0);
        let frame = east_north_up_to_fixed_frame(ground);
        let up = column(&frame, 2);
        let a = ground.to_ecef();
        let b = raised.to_ecef();
        assert_close(b.x - a.x, 30.0 * up[0], 1e-6);
        assert_close(b.y - a.y, 30.0 * up[1], 1e-6);
        assert_close(b.z - a.z, 30.0 * up[2], 1e-6);
    }

    #[test]
    fn frame_axes_are_orthonormal() {
        let frame = east_north_up_to_fixed_frame(Geodetic::new(-156.677, 20.872, 30.0));
        let (e, n, u) = (column(&frame, 0), column(&frame, 1), column(&frame, 2));
        assert_close(dot(e, e), 1.0, 1e-12);
        assert_close(dot(n, n), 1.0, 1e-12);
        assert_close(dot(u, u), 1.0, 1e-12);
        assert_close(dot(e, n), 0.0, 1e-12);
        assert_close(dot(e, u), 0.0, 1e-12);
        assert_close(dot(n, u), 0.0, 1e-12);
        assert_close(column(&frame, 3)[3], 1.0, 0.0);
    }

    #[test]
    fn frame_at_north_pole_points_up_the_z_axis() {
        let frame = east_north_up_to_fixed_frame(Geodetic::new(0.0, 90.0, 0.0));
        let up = column(&frame, 2);
        assert_close(up[2], 1.0, 1e-12);
        assert!(frame.0.iter().all(|v| v.is_finite()));
    }
}
