use std::io::Write;
use log::{debug, info};
use memview_lib::{Buffer, ByteView, with_pinned};
use memview_lib::constants::{VIEW_LABEL, BUFFER_LABEL, POINTER_LABEL, EMPTY_VIEW_MESSAGE, RELEASED_BUFFER_MESSAGE};
use memview_lib::error::Result;
use memview_lib::helper::display_helper::write_bytes;
use crate::chapter::Chapter;

pub const TITLE: &str = "Demonstration of ByteView usage";

/// bindings that live across chapters
struct State {
    view: ByteView,
    two_bytes: Option<Buffer>,
}

/// Prints the ByteView demonstration to `out`
pub struct Walkthrough<W: Write> {
    out: W,
}

impl<W: Write> Walkthrough<W> {
    pub fn new(out: W) -> Walkthrough<W> {
        Walkthrough {
            out
        }
    }

    #[allow(dead_code)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "{}", TITLE)?;
        let mut state = State {
            view: ByteView::empty(),
            two_bytes: None,
        };
        for chapter in Chapter::ALL.iter() {
            info!("chapter {}", chapter);
            self.run_chapter(*chapter, &mut state)?;
        }
        Ok(())
    }

    fn run_chapter(&mut self, chapter: Chapter, state: &mut State) -> Result<()> {
        match chapter {
            Chapter::EmptyView => {
                state.view = ByteView::from_buffer(None);
                self.report(&state.view)
            }
            Chapter::FullBuffer => {
                state.two_bytes = Some(Buffer::from(vec![0, 3]));
                state.view = ByteView::from_buffer(state.two_bytes.as_ref());
                self.report(&state.view)?;
                state.view.as_span().set(0, 42)?;
                self.display_data(&state.view)?;
                self.display_bytes(state.two_bytes.as_ref())
            }
            Chapter::DroppedView => {
                state.view = ByteView::empty();
                // the buffer is untouched by dropping the view
                self.display_bytes(state.two_bytes.as_ref())?;
                self.display_data(&state.view)?;
                if state.view.as_span().is_empty() {
                    writeln!(self.out, "{}", EMPTY_VIEW_MESSAGE)?;
                }
                Ok(())
            }
            Chapter::Reattached => {
                state.view = ByteView::from_buffer(state.two_bytes.as_ref());
                self.display_data(&state.view)?;
                if let Some(buf) = &state.two_bytes {
                    buf.set(0, 5)?;
                }
                self.display_data(&state.view)?;
                state.view.as_span().set(0, 9)?;
                self.display_bytes(state.two_bytes.as_ref())
            }
            Chapter::SubRange => {
                state.view = ByteView::from_range(state.two_bytes.as_ref(), 1, 1)?;
                self.display_data(&state.view)?;
                self.display_bytes(state.two_bytes.as_ref())?;
                state.view.as_span().set(0, 12)?;
                self.display_data(&state.view)?;
                self.display_bytes(state.two_bytes.as_ref())
            }
            Chapter::ReleasedOwner => {
                state.two_bytes = None;
                if let Some(backing) = state.view.backing() {
                    debug!("owner released, {} handle(s) left on the storage", backing.handle_count());
                }
                self.report(&state.view)?;
                state.view.as_span().set(0, 142)?;
                self.display_data(&state.view)?;
                self.display_bytes(state.two_bytes.as_ref())
            }
            Chapter::Collect => {
                // storage is reference counted, nothing is reclaimed while the view exists
                debug!("view still reachable: {:?}", state.view);
                self.display_data(&state.view)
            }
            Chapter::Pinned => {
                state.view = ByteView::from(vec![0, 2, 4, 6]);
                self.display_data(&state.view)?;
                let out = &mut self.out;
                with_pinned(&state.view, |pinned| {
                    let mut pointer = pinned.raw_address();
                    let mut read = Vec::with_capacity(pinned.len());
                    unsafe {
                        *pointer = 24;
                        for _ in 0..pinned.len() {
                            read.push(*pointer);
                            pointer = pointer.add(1);
                        }
                    }
                    write_bytes(out, POINTER_LABEL, read)
                })?;
                self.display_data(&state.view)
            }
        }
    }

    /// "Memory is empty" for empty views, the bytes otherwise
    fn report(&mut self, view: &ByteView) -> Result<()> {
        if view.is_empty() {
            writeln!(self.out, "{}", EMPTY_VIEW_MESSAGE)?;
            Ok(())
        } else {
            self.display_data(view)
        }
    }

    fn display_data(&mut self, view: &ByteView) -> Result<()> {
        write_bytes(&mut self.out, VIEW_LABEL, view.as_span())
    }

    fn display_bytes(&mut self, buf: Option<&Buffer>) -> Result<()> {
        match buf {
            Some(buf) => write_bytes(&mut self.out, BUFFER_LABEL, buf.iter()),
            None => {
                writeln!(self.out, "{}", RELEASED_BUFFER_MESSAGE)?;
                Ok(())
            }
        }
    }
}
