/// A deferred slideshow step, fired by the timer queue.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Step {
    FadeOut, // Hide the container and advance the index
    FadeIn,  // Show the image at the current index
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FadeState {
    Hidden,    // Opacity 0, nothing drawn
    FadingIn,  // Opacity rising towards 1
    Visible,   // Fully opaque
    FadingOut, // Opacity falling towards 0
}

/// A fade requested on the image container.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Fade {
    In,
    Out,
}
