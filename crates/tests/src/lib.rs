#[cfg(test)]
mod common;

#[cfg(test)]
mod locale_tests;

#[cfg(test)]
mod registry_tests;

#[cfg(test)]
mod sidebar_tests;

#[cfg(test)]
mod student_shell_tests;

#[cfg(test)]
mod teacher_shell_tests;

#[cfg(test)]
mod admin_shell_tests;

#[cfg(test)]
mod shell_invariant_tests;
