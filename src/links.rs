/// Opening external links (host form, map, image downloads)

/// Something that can hand a URL to the outside world
pub trait Launcher {
    fn open(&mut self, url: &str) -> std::io::Result<()>;
}

/// Opens URLs in the user's default web browser
#[derive(Debug, Default)]
pub struct SystemBrowser;

impl Launcher for SystemBrowser {
    fn open(&mut self, url: &str) -> std::io::Result<()> {
        tracing::info!("🌐 Opening {url}");
        webbrowser::open(url)
    }
}

/// Records opened URLs instead of launching anything
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct RecordingLauncher {
    pub opened: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
}

#[cfg(test)]
impl Launcher for RecordingLauncher {
    fn open(&mut self, url: &str) -> std::io::Result<()> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}
