#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  Advance,
  CloseDetail,
  CycleCategory,
  CycleCategoryBack,
  GoToWindow(usize),
  HideHelp,
  JumpToEnd,
  JumpToStart,
  None,
  OpenCurrentInBrowser,
  OpenDetail,
  Quit,
  ResumeAutoplay,
  Retreat,
  ShowHelp,
  SuspendAutoplay,
  SwitchDeckLeft,
  SwitchDeckRight,
  ToggleAutoplay,
}
