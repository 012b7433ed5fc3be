mod reverse;
