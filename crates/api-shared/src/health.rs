use crate::dto::HealthRes;

/// Simple health service shared by every API surface.
#[derive(Clone, Debug, Default)]
pub struct HealthService;

impl HealthService {
    /// Reports the service as alive. There are no downstream checks.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "ADE report assistant is alive".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_alive() {
        let res = HealthService::check_health();
        assert!(res.ok);
        assert!(res.message.contains("alive"));
    }
}
