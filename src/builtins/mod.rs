/*
## Built-in Commands

* `clear` clears the terminal
* `echo [words..]` prints its arguments separated by single spaces
* `whereami` prints the current directory
* `changedir <path>` makes 'path' the current directory
* `lastcommands [-c]` lists every line entered so far, or forgets them with `-c`

Argument counts are checked by the dispatcher before any of these run.
`quit` has no handler, the dispatcher hands control back to the input loop.
*/
pub mod cd;
pub mod echo;
pub mod history;
pub mod screen;
