use std::{collections::BTreeMap, fmt, io, sync::Arc};

#[derive(Debug, Clone)]
pub struct DemoError {
    pub key: &'static str,
    pub args: BTreeMap<&'static str, String>,
    pub causes: Vec<DemoCause>,
}

#[derive(Debug, Clone)]
pub enum DemoCause {
    Demo(Box<DemoError>),
    Std(Arc<dyn std::error::Error + Send + Sync>),
}

impl DemoError {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            args: BTreeMap::new(),
            causes: Vec::new(),
        }
    }

    pub fn with_arg(mut self, k: &'static str, v: impl ToString) -> Self {
        self.args.insert(k, v.to_string());
        self
    }

    pub fn push_demo(mut self, cause: DemoError) -> Self {
        self.causes.push(DemoCause::Demo(Box::new(cause)));
        self
    }

    pub fn push_std(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.causes.push(DemoCause::Std(Arc::new(cause)));
        self
    }
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.key)?;
        let mut first = true;
        for (k, v) in &self.args {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{k}={v}")?;
        }
        write!(f, ")")
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.causes.iter().find_map(|c| match c {
            DemoCause::Demo(e) => Some(e.as_ref() as &dyn std::error::Error),
            DemoCause::Std(e) => Some(e.as_ref()),
        })
    }
}

impl From<String> for DemoError {
    fn from(s: String) -> Self {
        DemoError::new("string-error").with_arg("msg", s)
    }
}

impl From<&str> for DemoError {
    fn from(s: &str) -> Self {
        DemoError::new("str-error").with_arg("msg", s)
    }
}

impl From<io::Error> for DemoError {
    fn from(err: io::Error) -> Self {
        DemoError::new("io-error").push_std(err)
    }
}

impl From<image::ImageError> for DemoError {
    fn from(err: image::ImageError) -> Self {
        DemoError::new("image-error").push_std(err)
    }
}

impl From<glutin::error::Error> for DemoError {
    fn from(err: glutin::error::Error) -> Self {
        DemoError::new("glutin::Error").push_std(err)
    }
}

impl From<raw_window_handle::HandleError> for DemoError {
    fn from(err: raw_window_handle::HandleError) -> Self {
        DemoError::new("raw-window-handle").push_std(err)
    }
}

impl From<winit::error::EventLoopError> for DemoError {
    fn from(err: winit::error::EventLoopError) -> Self {
        DemoError::new("winit::error::EventLoopError").push_std(err)
    }
}

impl From<winit::error::OsError> for DemoError {
    fn from(err: winit::error::OsError) -> Self {
        DemoError::new("winit::error::OsError").push_std(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_key_and_args() {
        let err = DemoError::new("shader-compile")
            .with_arg("stage", "vertex")
            .with_arg("log", "bad token");
        assert_eq!(err.to_string(), "shader-compile(log=bad token, stage=vertex)");
    }

    #[test]
    fn pushed_demo_cause_is_reachable_through_source() {
        let inner = DemoError::new("shader-compile").with_arg("stage", "fragment");
        let outer = DemoError::new("shader-program").push_demo(inner);

        let source = std::error::Error::source(&outer).expect("chained cause");
        assert_eq!(source.to_string(), "shader-compile(stage=fragment)");
    }

    #[test]
    fn pushed_std_cause_is_reachable_through_source() {
        let io = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err = DemoError::new("io-error").push_std(io);
        assert!(std::error::Error::source(&err).is_some());
    }
}
