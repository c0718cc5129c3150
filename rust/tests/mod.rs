mod busdiff;
